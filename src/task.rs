//! Tasks: plain to-dos, deadlines, and time-ranged events

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// The flavour of a task. This is a closed set: no other kind ever shows up
/// at runtime, and a task never changes kind after construction.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskKind {
    /// A plain to-do with no date attached
    Todo,
    /// Something due on a given day
    Deadline { by: NaiveDate },
    /// Something spanning a date range.
    /// `from` is expected to precede `to` but this is not enforced.
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// The one-letter tag used both in display forms and in storage records
    pub fn letter(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// The date format used in display forms (e.g. "Mar 01 2025")
const HUMAN_DATE_FORMAT: &str = "%b %d %Y";

/// Parse an ISO `YYYY-MM-DD` calendar date, ignoring surrounding whitespace
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    text.trim().parse::<NaiveDate>()
}

/// Render a date the way display forms show it
pub fn human_date(date: &NaiveDate) -> String {
    date.format(HUMAN_DATE_FORMAT).to_string()
}

/// A single task.
///
/// The kind and its dates are fixed when the task is built; the only thing
/// that ever changes afterwards is the done flag.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a plain to-do
    pub fn todo<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a deadline task. `by` must be an ISO `YYYY-MM-DD` date string
    /// (surrounding whitespace is ignored).
    pub fn deadline<S: Into<String>>(description: S, by: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by: parse_date(by)? },
        })
    }

    /// Create an event task. Both dates must be ISO `YYYY-MM-DD` strings.
    /// An event ending before it starts is accepted as-is.
    pub fn event<S: Into<String>>(
        description: S,
        from: &str,
        to: &str,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event {
                from: parse_date(from)?,
                to: parse_date(to)?,
            },
        })
    }

    pub fn description(&self) -> &str { &self.description }
    pub fn is_done(&self) -> bool     { self.done         }
    pub fn kind(&self) -> &TaskKind   { &self.kind        }

    /// Mark the task as completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task as not completed. Idempotent.
    pub fn unmark_done(&mut self) {
        self.done = false;
    }

    /// The date this task is associated with, used for chronological sorting
    /// and date queries: a deadline's due date, an event's start date.
    /// Plain to-dos have none.
    pub fn date(&self) -> Option<NaiveDate> {
        match &self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(*by),
            TaskKind::Event { from, .. } => Some(*from),
        }
    }

    /// The pipe-delimited record written to the storage file.
    /// Dates are stored as ISO `YYYY-MM-DD`, one field each.
    pub fn file_record(&self) -> String {
        let done = if self.done { "1" } else { "0" };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}", done, self.description),
            TaskKind::Deadline { by } => format!("D | {} | {} | {}", done, self.description, by),
            TaskKind::Event { from, to } => {
                format!("E | {} | {} | {} | {}", done, self.description, from, to)
            }
        }
    }
}

/// The display form: kind tag, status glyph, description, and a date suffix
/// for the kinds that carry dates
impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let glyph = if self.done { "X" } else { " " };
        write!(f, "[{}][{}] {}", self.kind.letter(), glyph, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", human_date(by)),
            TaskKind::Event { from, to } => {
                write!(f, " (from: {} to: {})", human_date(from), human_date(to))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        let mut todo = Task::todo("read book");
        assert_eq!(todo.to_string(), "[T][ ] read book");
        todo.mark_done();
        assert_eq!(todo.to_string(), "[T][X] read book");

        let deadline = Task::deadline("return book", "2025-03-01").unwrap();
        assert_eq!(deadline.to_string(), "[D][ ] return book (by: Mar 01 2025)");

        let event = Task::event("book fair", "2025-03-01", "2025-03-03").unwrap();
        assert_eq!(
            event.to_string(),
            "[E][ ] book fair (from: Mar 01 2025 to: Mar 03 2025)"
        );
    }

    #[test]
    fn file_records() {
        let mut deadline = Task::deadline("return book", " 2025-03-01 ").unwrap();
        assert_eq!(deadline.file_record(), "D | 0 | return book | 2025-03-01");
        deadline.mark_done();
        assert_eq!(deadline.file_record(), "D | 1 | return book | 2025-03-01");

        let event = Task::event("book fair", "2025-03-01", "2025-03-03").unwrap();
        assert_eq!(event.file_record(), "E | 0 | book fair | 2025-03-01 | 2025-03-03");
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(Task::deadline("x", "not-a-date").is_err());
        assert!(Task::deadline("x", "2025-13-01").is_err());
        assert!(Task::event("x", "2025-01-01", "tomorrow").is_err());
    }

    #[test]
    fn inverted_event_range_is_accepted() {
        let event = Task::event("time travel", "2025-03-03", "2025-03-01").unwrap();
        assert_eq!(event.date(), parse_date("2025-03-03").ok());
    }

    #[test]
    fn associated_dates() {
        assert_eq!(Task::todo("x").date(), None);
        let deadline = Task::deadline("x", "2025-03-01").unwrap();
        assert_eq!(deadline.date(), Some(chrono::NaiveDate::from_ymd(2025, 3, 1)));
        let event = Task::event("x", "2025-01-02", "2025-01-05").unwrap();
        assert_eq!(event.date(), Some(chrono::NaiveDate::from_ymd(2025, 1, 2)));
    }
}
