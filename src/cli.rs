use clap::Parser;

use crate::colors::Palette;

/// Interactive, in-memory task list.
/// Tasks live only for the current run; type `end` to quit.
#[derive(Parser)]
#[command(name = "tasklist", version, about = "Interactive in-memory task list")]
pub struct Cli {
    /// Draw priority and due cells as letters instead of colour blocks.
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Pick the palette, honouring a non-empty `NO_COLOR` as well as the flag.
    pub fn palette(&self) -> Palette {
        let env_disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if self.no_color || env_disabled {
            Palette::Plain
        } else {
            Palette::Ansi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_selects_plain_palette() {
        let cli = Cli::parse_from(["tasklist", "--no-color"]);
        assert!(cli.no_color);
        assert_eq!(cli.palette(), Palette::Plain);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["tasklist", "add"]).is_err());
    }
}
