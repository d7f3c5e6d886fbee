//! Rendering of response messages.
//!
//! Every function returns the string the interpreter hands back to whatever
//! front-end drives it. Nothing in here prints: console framing (or a chat
//! window) is the adapter's business.

use chrono::NaiveDate;

use crate::task::{human_date, Task, TaskKind};
use crate::tasklist::TaskList;

pub fn welcome() -> String {
    "Hello! What can I do for you?".to_string()
}

pub fn farewell() -> String {
    "Bye. Hope to see you again soon!".to_string()
}

/// The whole list, numbered from 1
pub fn task_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "Your list is currently empty.".to_string();
    }
    let mut out = String::from("Here are the tasks in your list:");
    for (i, task) in tasks.tasks().iter().enumerate() {
        out.push_str(&format!("\n{}.{}", i + 1, task));
    }
    out
}

/// The result of a keyword search, numbered 1..n among the matches only
pub fn matching_tasks(matches: &[&Task]) -> String {
    if matches.is_empty() {
        return "No matching tasks found.".to_string();
    }
    let mut out = String::from("Here are the matching tasks in your list:");
    for (i, task) in matches.iter().enumerate() {
        out.push_str(&format!("\n{}.{}", i + 1, task));
    }
    out
}

pub fn added_task(task: &Task, new_size: usize) -> String {
    format!(
        "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
        task, new_size
    )
}

pub fn removed_task(task: &Task, new_size: usize) -> String {
    format!(
        "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
        task, new_size
    )
}

pub fn status_change(task: &Task, done: bool) -> String {
    if done {
        format!("Nice! I've marked this task as done:\n  {}", task)
    } else {
        format!("OK, I've marked this task as not done yet:\n  {}", task)
    }
}

/// Every deadline due on `date` and every event starting on it, numbered
/// 1..n among the matches only
pub fn tasks_on_date(date: NaiveDate, tasks: &TaskList) -> String {
    let matches: Vec<&Task> = tasks
        .tasks()
        .iter()
        .filter(|task| occurs_on(task, date))
        .collect();

    if matches.is_empty() {
        return "No tasks found for this date.".to_string();
    }
    let mut out = format!("Here are the tasks occurring on {}:", human_date(&date));
    for (i, task) in matches.iter().enumerate() {
        out.push_str(&format!("\n{}.{}", i + 1, task));
    }
    out
}

pub fn sorted_by_name() -> String {
    "Sorted tasks alphabetically by description!".to_string()
}

pub fn sorted_by_date() -> String {
    "Sorted tasks chronologically by date! (Tasks without dates are at the bottom)".to_string()
}

fn occurs_on(task: &Task, date: NaiveDate) -> bool {
    match task.kind() {
        TaskKind::Deadline { by } => *by == date,
        TaskKind::Event { from, .. } => *from == date,
        TaskKind::Todo => false,
    }
}
