//! Task data structure and related functionality.
//!
//! This module defines the `Task` record: a scheduled moment, a priority and
//! one or more lines of free text.

use chrono::{NaiveDate, NaiveTime};

use crate::fields::*;

/// A single entry in the task list.
///
/// `description` holds trimmed, non-blank lines and is never empty for a task
/// that made it into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub priority: Priority,
    pub description: Vec<String>,
}

impl Task {
    pub fn new(priority: Priority, date: NaiveDate, time: NaiveTime, description: Vec<String>) -> Self {
        Self { date, time, priority, description }
    }

    /// Urgency is derived from the date each time it is asked for.
    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        Urgency::classify(self.date, today)
    }

    /// Date in canonical `yyyy-mm-dd` form.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time in canonical 24-hour `hh:mm` form.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
