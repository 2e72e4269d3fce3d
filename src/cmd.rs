//! Command implementations for the interactive loop.
//!
//! This module contains the action dispatcher and the handlers behind each
//! action: adding, printing, editing and deleting tasks.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::colors::Palette;
use crate::db::TaskStore;
use crate::error::Result;
use crate::fields::TaskField;
use crate::prompt::Prompter;
use crate::table::print_table;
use crate::task::Task;

/// Top-level actions accepted at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Action::Add),
            "print" => Ok(Action::Print),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            "end" => Ok(Action::End),
            _ => Err(()),
        }
    }
}

/// Current calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// One run of the task list: the store plus the streams and settings used to
/// talk to the user.
pub struct Session<R, W> {
    pub store: TaskStore,
    prompt: Prompter<R, W>,
    palette: Palette,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, palette: Palette) -> Self {
        Self::with_clock(input, out, palette, today_utc)
    }

    pub fn with_clock(input: R, out: W, palette: Palette, today: fn() -> NaiveDate) -> Self {
        Self {
            store: TaskStore::new(),
            prompt: Prompter::new(input, out),
            palette,
            today,
        }
    }

    /// Run the action loop until `end` is entered.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompt.say("Input an action (add, print, edit, delete, end):")?;
            let line = self.prompt.read_line()?;
            let Ok(action) = line.parse::<Action>() else {
                self.prompt.say("The input action is invalid")?;
                continue;
            };
            debug!(?action, "dispatching");
            match action {
                Action::Add => self.cmd_add()?,
                Action::Print => {
                    self.cmd_print()?;
                }
                Action::Edit => self.cmd_edit()?,
                Action::Delete => self.cmd_delete()?,
                Action::End => {
                    self.prompt.say("Tasklist exiting!")?;
                    self.prompt.out.flush()?;
                    info!(tasks = self.store.len(), "session ended");
                    return Ok(());
                }
            }
        }
    }

    /// Collect all four fields and append the task, unless the description
    /// came back empty.
    pub fn cmd_add(&mut self) -> Result<()> {
        let priority = self.prompt.ask_priority()?;
        let date = self.prompt.ask_date()?;
        let time = self.prompt.ask_time()?;
        let description = self.prompt.ask_description()?;
        if description.is_empty() {
            return self.prompt.say("The task is blank");
        }
        self.store.push(Task::new(priority, date, time, description));
        Ok(())
    }

    /// Print the table. Returns `false` if the store was empty.
    pub fn cmd_print(&mut self) -> Result<bool> {
        let today = (self.today)();
        Ok(print_table(&mut self.prompt.out, &self.store, today, self.palette)?)
    }

    pub fn cmd_edit(&mut self) -> Result<()> {
        if !self.cmd_print()? {
            return Ok(());
        }
        let index = self.prompt.ask_task_number(self.store.len())?;
        let field = self.prompt.ask_field()?;
        let task = self.store.get_mut(index);
        match field {
            TaskField::Priority => task.priority = self.prompt.ask_priority()?,
            TaskField::Date => task.date = self.prompt.ask_date()?,
            TaskField::Time => task.time = self.prompt.ask_time()?,
            TaskField::Task => {
                let description = self.prompt.ask_description()?;
                if !description.is_empty() {
                    task.description = description;
                }
            }
        }
        debug!(index, %field, "task edited");
        self.prompt.say("The task is changed")
    }

    pub fn cmd_delete(&mut self) -> Result<()> {
        if !self.cmd_print()? {
            return Ok(());
        }
        let index = self.prompt.ask_task_number(self.store.len())?;
        let removed = self.store.remove(index);
        debug!(index, date = %removed.date_label(), "task deleted");
        self.prompt.say("The task is deleted")
    }
}
