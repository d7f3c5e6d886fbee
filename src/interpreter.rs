//! Turning raw input lines into task-list operations.
//!
//! The interpreter is a one-step-per-line state machine: it classifies the
//! first word of the input into a [`CommandKind`], validates the remainder
//! of the line for that kind, applies the operation to its task list, saves
//! the list, and hands back a [`Reply`]. There is no cross-line state beyond
//! the list itself and the exit signal carried by the reply.

use crate::error::Error;
use crate::render;
use crate::storage::Storage;
use crate::task::{parse_date, Task};
use crate::tasklist::TaskList;

/// The closed set of command verbs. Anything unrecognized is `Unknown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Bye,
    List,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    Delete,
    Find,
    FindDate,
    Sort,
    Unknown,
}

impl CommandKind {
    /// Classify a command word. Case-insensitive exact match.
    pub fn classify(word: &str) -> Self {
        match word.to_ascii_lowercase().as_str() {
            "bye" => CommandKind::Bye,
            "list" => CommandKind::List,
            "mark" => CommandKind::Mark,
            "unmark" => CommandKind::Unmark,
            "todo" => CommandKind::Todo,
            "deadline" => CommandKind::Deadline,
            "event" => CommandKind::Event,
            "delete" => CommandKind::Delete,
            "find" => CommandKind::Find,
            "find-date" => CommandKind::FindDate,
            "sort" => CommandKind::Sort,
            _ => CommandKind::Unknown,
        }
    }
}

/// What the interpreter hands back for one input line
#[derive(Debug, PartialEq)]
pub struct Reply {
    /// The message to show the user
    pub text: String,
    /// True after `bye`: the caller should stop feeding input
    pub exit: bool,
}

/// Processes one command per call, owning the task list and saving it
/// through its [`Storage`] after every successful non-`bye` step.
pub struct Interpreter {
    tasks: TaskList,
    storage: Storage,
}

impl Interpreter {
    pub fn new(tasks: TaskList, storage: Storage) -> Self {
        Self { tasks, storage }
    }

    /// The current task list
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Handle one raw input line.
    ///
    /// Blank lines produce no reply and no save. A validation failure
    /// becomes its message and never touches the list or the file. Every
    /// other command saves the list once it has run; if that save fails the
    /// failure is reported in the reply but the in-memory change stays.
    pub fn handle(&mut self, line: &str) -> Option<Reply> {
        let input = line.trim();
        if input.is_empty() {
            return None;
        }

        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim_start())),
            None => (input, None),
        };

        let kind = CommandKind::classify(word);
        log::debug!("Handling {:?} command", kind);

        if kind == CommandKind::Bye {
            return Some(Reply {
                text: render::farewell(),
                exit: true,
            });
        }

        let text = match self.execute(kind, rest) {
            Err(err) => err.to_string(),
            Ok(response) => match self.storage.save(&self.tasks) {
                Ok(()) => response,
                Err(err) => {
                    log::warn!("Saving the task list failed: {}", err);
                    format!("{}\nWarning: your tasks could not be saved: {}", response, err)
                }
            },
        };
        Some(Reply { text, exit: false })
    }

    fn execute(&mut self, kind: CommandKind, rest: Option<&str>) -> Result<String, Error> {
        match kind {
            CommandKind::Bye => unreachable!("bye is handled before dispatch"),
            CommandKind::List => Ok(render::task_list(&self.tasks)),
            CommandKind::Mark => self.set_done(rest, true),
            CommandKind::Unmark => self.set_done(rest, false),
            CommandKind::Todo => self.add_todo(rest),
            CommandKind::Deadline => self.add_deadline(rest),
            CommandKind::Event => self.add_event(rest),
            CommandKind::Delete => self.delete(rest),
            CommandKind::Find => self.find(rest),
            CommandKind::FindDate => self.find_date(rest),
            CommandKind::Sort => self.sort(rest),
            CommandKind::Unknown => Err(Error::user("I don't understand that command.")),
        }
    }

    fn set_done(&mut self, rest: Option<&str>, done: bool) -> Result<String, Error> {
        let index = parse_index(rest, "Please specify the task number.")?;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| Error::user("Invalid task number."))?;
        if done {
            task.mark_done();
        } else {
            task.unmark_done();
        }
        Ok(render::status_change(task, done))
    }

    fn add_todo(&mut self, rest: Option<&str>) -> Result<String, Error> {
        let description = non_empty(rest)
            .ok_or_else(|| Error::user("The description of a todo cannot be empty."))?;
        self.add_task(Task::todo(description))
    }

    fn add_deadline(&mut self, rest: Option<&str>) -> Result<String, Error> {
        const USAGE: &str = "Deadlines must include a description and ' /by ' [yyyy-mm-dd].";
        let rest = rest.ok_or_else(|| Error::user(USAGE))?;
        let (description, by) = rest.split_once(" /by ").ok_or_else(|| Error::user(USAGE))?;
        let task = Task::deadline(description, by)
            .map_err(|_| Error::user("Please use the format YYYY-MM-DD for the date."))?;
        self.add_task(task)
    }

    fn add_event(&mut self, rest: Option<&str>) -> Result<String, Error> {
        const USAGE: &str =
            "Events must include a description, ' /from ' and ' /to ' [yyyy-mm-dd].";
        let rest = rest.ok_or_else(|| Error::user(USAGE))?;
        let (description, times) = rest
            .split_once(" /from ")
            .ok_or_else(|| Error::user(USAGE))?;
        let (from, to) = times.split_once(" /to ").ok_or_else(|| Error::user(USAGE))?;
        let task = Task::event(description, from, to)
            .map_err(|_| Error::user("Please use YYYY-MM-DD for event dates."))?;
        self.add_task(task)
    }

    fn add_task(&mut self, task: Task) -> Result<String, Error> {
        let reply = render::added_task(&task, self.tasks.len() + 1);
        self.tasks.add(task);
        Ok(reply)
    }

    fn delete(&mut self, rest: Option<&str>) -> Result<String, Error> {
        let index = parse_index(rest, "Please specify the task number to delete.")?;
        let removed = self
            .tasks
            .delete(index)
            .ok_or_else(|| Error::user("Invalid task number."))?;
        Ok(render::removed_task(&removed, self.tasks.len()))
    }

    fn find(&self, rest: Option<&str>) -> Result<String, Error> {
        let keyword =
            non_empty(rest).ok_or_else(|| Error::user("Please specify a keyword to find."))?;
        Ok(render::matching_tasks(&self.tasks.find(keyword)))
    }

    fn find_date(&self, rest: Option<&str>) -> Result<String, Error> {
        let text = non_empty(rest)
            .ok_or_else(|| Error::user("Please specify a date in YYYY-MM-DD format."))?;
        let date = parse_date(text)
            .map_err(|_| Error::user("Please use the format YYYY-MM-DD for searching."))?;
        Ok(render::tasks_on_date(date, &self.tasks))
    }

    fn sort(&mut self, rest: Option<&str>) -> Result<String, Error> {
        let sort_kind = non_empty(rest)
            .ok_or_else(|| Error::user("Please specify sort type: 'sort name' or 'sort date'."))?;
        match sort_kind.to_ascii_lowercase().as_str() {
            "name" => {
                self.tasks.sort_by_name();
                Ok(render::sorted_by_name())
            }
            "date" => {
                self.tasks.sort_by_date();
                Ok(render::sorted_by_date())
            }
            _ => Err(Error::user(
                "Unknown sort type. Please use 'sort name' or 'sort date'.",
            )),
        }
    }
}

/// The remainder of the line, trimmed, or `None` if there is nothing left
fn non_empty(rest: Option<&str>) -> Option<&str> {
    rest.map(str::trim).filter(|rest| !rest.is_empty())
}

/// Parse a 1-based task number into a 0-based index.
/// Bounds are checked by the caller against the actual list.
fn parse_index(rest: Option<&str>, missing_message: &str) -> Result<usize, Error> {
    let number = non_empty(rest).ok_or_else(|| Error::user(missing_message))?;
    let n: usize = number
        .parse()
        .map_err(|_| Error::user("Invalid task number."))?;
    n.checked_sub(1)
        .ok_or_else(|| Error::user("Invalid task number."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(CommandKind::classify("LIST"), CommandKind::List);
        assert_eq!(CommandKind::classify("Find-Date"), CommandKind::FindDate);
        assert_eq!(CommandKind::classify("bYe"), CommandKind::Bye);
        assert_eq!(CommandKind::classify("listing"), CommandKind::Unknown);
        assert_eq!(CommandKind::classify("lis"), CommandKind::Unknown);
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index(Some("3"), "missing").unwrap(), 2);
        assert_eq!(parse_index(Some(" 1 "), "missing").unwrap(), 0);
        match parse_index(None, "missing") {
            Err(Error::UserInput(msg)) => assert_eq!(msg, "missing"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(parse_index(Some("zero"), "missing").is_err());
        assert!(parse_index(Some("0"), "missing").is_err());
        assert!(parse_index(Some("-2"), "missing").is_err());
    }
}
