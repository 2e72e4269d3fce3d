//! Enumerations and field types for tasks.
//!
//! This module defines the symbolic values attached to each task: the
//! user-chosen priority, the derived urgency, and the names of editable fields.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Priority classification for task importance, entered as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Parse a case-insensitive single-letter code (C, H, N, L).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(Priority::Critical),
            "H" => Some(Priority::High),
            "N" => Some(Priority::Normal),
            "L" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Priority::Critical => 'C',
            Priority::High => 'H',
            Priority::Normal => 'N',
            Priority::Low => 'L',
        }
    }
}

/// Due-date classification relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    InTime,
    Today,
    Overdue,
}

impl Urgency {
    /// Classify a task date against `today`.
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        if date < today {
            Urgency::Overdue
        } else if date == today {
            Urgency::Today
        } else {
            Urgency::InTime
        }
    }

    pub fn code(self) -> char {
        match self {
            Urgency::InTime => 'I',
            Urgency::Today => 'T',
            Urgency::Overdue => 'O',
        }
    }
}

/// Fields that can be changed through the edit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Priority,
    Date,
    Time,
    Task,
}

impl FromStr for TaskField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "priority" => Ok(TaskField::Priority),
            "date" => Ok(TaskField::Date),
            "time" => Ok(TaskField::Time),
            "task" => Ok(TaskField::Task),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskField::Priority => "priority",
            TaskField::Date => "date",
            TaskField::Time => "time",
            TaskField::Task => "task",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_from_code() {
        assert_eq!(Priority::from_code("c"), Some(Priority::Critical));
        assert_eq!(Priority::from_code("H"), Some(Priority::High));
        assert_eq!(Priority::from_code(" n "), Some(Priority::Normal));
        assert_eq!(Priority::from_code("l"), Some(Priority::Low));
        assert_eq!(Priority::from_code("X"), None);
        assert_eq!(Priority::from_code("CH"), None);
        assert_eq!(Priority::from_code(""), None);
    }

    #[test]
    fn test_urgency_classify() {
        let today = ymd(2023, 5, 1);
        assert_eq!(Urgency::classify(ymd(2023, 4, 30), today), Urgency::Overdue);
        assert_eq!(Urgency::classify(ymd(2023, 5, 1), today), Urgency::Today);
        assert_eq!(Urgency::classify(ymd(2023, 5, 2), today), Urgency::InTime);
        assert_eq!(Urgency::classify(ymd(2000, 1, 1), today), Urgency::Overdue);
    }

    #[test]
    fn test_task_field_parsing_is_exact() {
        assert_eq!("priority".parse::<TaskField>(), Ok(TaskField::Priority));
        assert_eq!("task".parse::<TaskField>(), Ok(TaskField::Task));
        assert!("Task".parse::<TaskField>().is_err());
        assert!("desc".parse::<TaskField>().is_err());
        assert_eq!(TaskField::Date.to_string(), "date");
    }
}
