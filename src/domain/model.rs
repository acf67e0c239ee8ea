use crate::utils::error::{Result, RosterError};
use std::fmt;

/// Highest mark a subject may receive unless configured otherwise.
pub const DEFAULT_MAX_MARK: i32 = 100;

/// One subject/mark pair on a student's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub subject: String,
    pub mark: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    entries: Vec<Entry>,
}

impl Student {
    /// The name is taken as-is; empty names are allowed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn add_entry(&mut self, subject: &str, mark: i32) -> Result<()> {
        self.add_entry_capped(subject, mark, DEFAULT_MAX_MARK)
    }

    /// Only the upper bound is checked. Negative marks go through.
    pub fn add_entry_capped(&mut self, subject: &str, mark: i32, max_mark: i32) -> Result<()> {
        if mark > max_mark {
            return Err(RosterError::InvalidMark {
                subject: subject.to_string(),
                mark,
                max_mark,
            });
        }
        self.entries.push(Entry {
            subject: subject.to_string(),
            mark,
        });
        Ok(())
    }

    pub fn average(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let total: i64 = self.entries.iter().map(|e| i64::from(e.mark)).sum();
        total as f64 / self.entries.len() as f64
    }

    /// `"<subject>:<mark> "` per entry, trailing space kept.
    pub fn subjects_and_marks(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}:{} ", e.subject, e.mark))
            .collect()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Student {
    // `{:?}` keeps the fractional digit on whole averages (80.0, not 80).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Subjects and Marks: {}, Average Score: {:?}",
            self.name,
            self.subjects_and_marks(),
            self.average()
        )
    }
}
