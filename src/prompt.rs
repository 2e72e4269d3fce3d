//! Line-oriented prompting and validated field acquisition.
//!
//! Every `ask_*` method prints its prompt, reads one line and hands it to a
//! pure parser from [`crate::db`] or [`crate::fields`]. Invalid input prints
//! the field's diagnostic (priority has none) and asks again; there is no
//! retry limit. The only way out of a loop besides valid input is standard
//! input closing, reported as [`TasklistError::InputClosed`].

use std::io::{BufRead, Write};

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::db::{parse_date_input, parse_task_number, parse_time_input};
use crate::error::{Result, TasklistError};
use crate::fields::{Priority, TaskField};

/// Paired input and output streams for one interactive session.
pub struct Prompter<R, W> {
    input: R,
    pub out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Read one line without its trailing newline. Bytes that are not valid
    /// UTF-8 become replacement characters and go through the usual parsing.
    pub fn read_line(&mut self) -> Result<String> {
        self.out.flush()?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(TasklistError::InputClosed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Write `message` on its own line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    /// Prompt and read until `parse` accepts the line. `invalid` is printed
    /// after each rejected line when present.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: Option<&str>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            self.say(prompt)?;
            let line = self.read_line()?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }
            debug!(input = %line, prompt, "rejected input");
            if let Some(message) = invalid {
                self.say(message)?;
            }
        }
    }

    pub fn ask_priority(&mut self) -> Result<Priority> {
        self.ask_until("Input the task priority (C, H, N, L):", None, Priority::from_code)
    }

    pub fn ask_date(&mut self) -> Result<NaiveDate> {
        self.ask_until(
            "Input the date (yyyy-mm-dd):",
            Some("The input date is invalid"),
            parse_date_input,
        )
    }

    pub fn ask_time(&mut self) -> Result<NaiveTime> {
        self.ask_until(
            "Input the time (hh:mm):",
            Some("The input time is invalid"),
            parse_time_input,
        )
    }

    /// Collect description lines up to the first blank one. Lines are trimmed;
    /// an empty result is returned as-is for the caller to judge.
    pub fn ask_description(&mut self) -> Result<Vec<String>> {
        self.say("Input a new task (enter a blank line to end):")?;
        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return Ok(lines);
            }
            lines.push(line.to_string());
        }
    }

    /// Ask for a one-based task number and return the zero-based index.
    pub fn ask_task_number(&mut self, count: usize) -> Result<usize> {
        let prompt = format!("Input the task number (1-{count}):");
        self.ask_until(&prompt, Some("Invalid task number"), |s| parse_task_number(s, count))
    }

    pub fn ask_field(&mut self) -> Result<TaskField> {
        self.ask_until(
            "Input a field to edit (priority, date, time, task):",
            Some("Invalid field"),
            |s| s.parse().ok(),
        )
    }
}
