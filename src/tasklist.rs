//! The ordered, in-memory task collection

use crate::task::Task;

/// An ordered collection of tasks.
///
/// Tasks are shown to the user numbered from 1; every method here takes
/// 0-based indices. There are no stable identifiers: deleting a task
/// renumbers everything after it, so an index is only valid against the
/// snapshot it was computed from.
#[derive(Debug, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Wrap an existing sequence of tasks, e.g. one loaded from storage
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Append a task at the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// Remove and return the task at `index`, shifting every later task
    /// down by one. Returns `None` if the index is out of bounds.
    pub fn delete(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// A read-only view of the tasks, in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Every task whose display form contains `keyword`, in original order.
    /// The match is case-sensitive and runs against the full rendered line
    /// (kind tag, status glyph and date suffix included), not just the
    /// description.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.to_string().contains(keyword))
            .collect()
    }

    /// Stable sort by description, ascending, case-sensitive
    pub fn sort_by_name(&mut self) {
        self.tasks.sort_by(|a, b| a.description().cmp(b.description()));
    }

    /// Stable sort by associated date, ascending. Tasks without a date end
    /// up after every dated task, keeping their relative order.
    pub fn sort_by_date(&mut self) {
        self.tasks.sort_by_key(|task| (task.date().is_none(), task.date()));
    }
}
