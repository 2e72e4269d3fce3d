//! # Tasklist
//!
//! A single-user task list driven from the terminal, one line at a time.
//!
//! ## Actions
//!
//! - `add` - priority (C/H/N/L), date (`yyyy-mm-dd`), time (`hh:mm`) and one
//!   or more lines of text, ended by a blank line
//! - `print` - show every task in a table with coloured priority (P) and
//!   due (D) cells
//! - `edit` - change one field of a numbered task
//! - `delete` - remove a numbered task
//! - `end` - quit
//!
//! Invalid input is never fatal: each prompt simply repeats until it gets a
//! usable answer. Nothing is written to disk.
//!
//! Set `TASKLIST_DEBUG=1` to get debug logs on stderr (`RUST_LOG` overrides
//! the filter). Pass `--no-color` or set `NO_COLOR` for letter cells.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod colors;
pub mod db;
pub mod error;
pub mod fields;
pub mod prompt;
pub mod table;
pub mod task;

use cli::Cli;
use cmd::Session;
use error::TasklistError;

fn main() -> anyhow::Result<()> {
    if std::env::var_os("TASKLIST_DEBUG").is_some() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tasklist=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), cli.palette());

    match session.run() {
        Ok(()) => Ok(()),
        Err(TasklistError::InputClosed) => {
            warn!("standard input closed, leaving without the end command");
            Ok(())
        }
        Err(e) => Err(e).context("task list session failed"),
    }
}
