//! In-memory task store and input parsing helpers.
//!
//! This module provides the `TaskStore` struct holding the session's tasks in
//! insertion order, along with the parse functions that turn raw input lines
//! into normalised dates and times.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::task::Task;

/// Ordered, process-scoped collection of tasks. Positions are zero-based here
/// and shown one-based to the user.
#[derive(Debug, Default)]
pub struct TaskStore {
    pub tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task at the end of the list.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
        debug!(count = self.tasks.len(), "task added");
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a mutable reference to the task at `index`.
    ///
    /// `index` must come from `parse_task_number` against the current length;
    /// anything else panics.
    pub fn get_mut(&mut self, index: usize) -> &mut Task {
        &mut self.tasks[index]
    }

    /// Remove the task at `index`, shifting later tasks down by one. Same
    /// precondition as [`TaskStore::get_mut`].
    pub fn remove(&mut self, index: usize) -> Task {
        let removed = self.tasks.remove(index);
        debug!(index, count = self.tasks.len(), "task removed");
        removed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

/// Parse a date typed as `yyyy-m-d` or `yyyy-mm-dd` (or any mix of one- and
/// two-digit month and day). The result must be a real calendar date.
pub fn parse_date_input(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || !all_digits(year) || !is_short_number(month) || !is_short_number(day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parse a time typed as `h:mm` or `hh:mm`. Single-digit minutes are padded
/// the same way, so `9:5` means 09:05.
pub fn parse_time_input(s: &str) -> Option<NaiveTime> {
    let (hour, minute) = s.trim().split_once(':')?;
    if !is_short_number(hour) || !is_short_number(minute) {
        return None;
    }
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

/// Parse a one-based task number and return its zero-based index if it lies
/// within `1..=count`.
pub fn parse_task_number(s: &str, count: usize) -> Option<usize> {
    let n: usize = s.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_short_number(s: &str) -> bool {
    (1..=2).contains(&s.len()) && all_digits(s)
}
