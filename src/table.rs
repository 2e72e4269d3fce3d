//! Fixed-width table rendering for the task list.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::colors::Palette;
use crate::db::TaskStore;
use crate::task::Task;

/// Width of the task text column.
pub const TEXT_WIDTH: usize = 44;

pub const BORDER: &str =
    "+----+------------+-------+---+---+--------------------------------------------+";
pub const HEADER: &str =
    "| N  |    Date    | Time  | P | D |                   Task                     |";
/// Left-hand columns repeated as padding on continuation rows.
const BLANK_COLUMNS: &str = "|    |            |       |   |   |";

/// Split a line into consecutive chunks of at most `width` characters.
pub fn wrap_chunks(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Write one task's rows: the numbered main row, continuation rows for every
/// further chunk, then a closing border.
pub fn write_task<W: Write>(
    out: &mut W,
    number: usize,
    task: &Task,
    today: NaiveDate,
    palette: Palette,
) -> io::Result<()> {
    let mut chunks = task
        .description
        .iter()
        .flat_map(|line| wrap_chunks(line, TEXT_WIDTH));

    let first = chunks.next().unwrap_or_default();
    writeln!(
        out,
        "| {:<2} | {} | {} | {} | {} |{:<width$}|",
        number,
        task.date_label(),
        task.time_label(),
        palette.priority_cell(task.priority),
        palette.urgency_cell(task.urgency(today)),
        first,
        width = TEXT_WIDTH
    )?;
    for chunk in chunks {
        writeln!(out, "{}{:<width$}|", BLANK_COLUMNS, chunk, width = TEXT_WIDTH)?;
    }
    writeln!(out, "{BORDER}")
}

/// Write the whole table. Returns `false` without drawing anything but the
/// empty-list notice when the store has no tasks.
pub fn print_table<W: Write>(
    out: &mut W,
    store: &TaskStore,
    today: NaiveDate,
    palette: Palette,
) -> io::Result<bool> {
    if store.is_empty() {
        writeln!(out, "No tasks have been input")?;
        return Ok(false);
    }
    writeln!(out, "{BORDER}")?;
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{BORDER}")?;
    for (i, task) in store.iter().enumerate() {
        write_task(out, i + 1, task, today, palette)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    }

    fn task(lines: &[&str]) -> Task {
        Task::new(
            Priority::High,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            lines.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn render(store: &TaskStore) -> (bool, String) {
        let mut out = Vec::new();
        let printed = print_table(&mut out, store, today(), Palette::Plain).unwrap();
        (printed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_border_and_header_widths_match() {
        assert_eq!(BORDER.len(), HEADER.len());
        assert_eq!(BORDER.len(), BLANK_COLUMNS.len() + TEXT_WIDTH + 1);
    }

    #[test]
    fn test_wrap_chunks() {
        assert_eq!(wrap_chunks("abcdef", 4), vec!["abcd", "ef"]);
        assert_eq!(wrap_chunks("abcd", 4), vec!["abcd"]);
        assert_eq!(wrap_chunks("", 4), Vec::<String>::new());
        assert_eq!(wrap_chunks("ééééé", 2), vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_empty_store_prints_notice() {
        let (printed, text) = render(&TaskStore::new());
        assert!(!printed);
        assert_eq!(text, "No tasks have been input\n");
    }

    #[test]
    fn test_single_row_layout() {
        let mut store = TaskStore::new();
        store.push(task(&["buy milk"]));
        let (printed, text) = render(&store);
        assert!(printed);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[2], BORDER);
        assert_eq!(
            lines[3],
            "| 1  | 2023-05-01 | 09:05 | H | T |buy milk                                    |"
        );
        assert_eq!(lines[4], BORDER);
    }

    #[test]
    fn test_long_and_multi_line_descriptions_wrap() {
        let long = "x".repeat(50);
        let mut store = TaskStore::new();
        store.push(task(&[&long, "second"]));
        store.push(task(&["other"]));
        let (_, text) = render(&store);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], format!("| 1  | 2023-05-01 | 09:05 | H | T |{}|", "x".repeat(44)));
        assert_eq!(lines[4], format!("{}{:<44}|", BLANK_COLUMNS, "xxxxxx"));
        assert_eq!(lines[5], format!("{}{:<44}|", BLANK_COLUMNS, "second"));
        assert_eq!(lines[6], BORDER);
        assert!(lines[7].starts_with("| 2  |"));
        assert_eq!(lines[8], BORDER);
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.len() == BORDER.len()));
    }
}
