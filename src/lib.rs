//! This crate provides a single-user, line-oriented task manager.
//!
//! Raw input lines go through the [`Interpreter`](interpreter::Interpreter), which classifies each line into a command, validates its arguments, and applies it to the ordered [`TaskList`].
//!
//! The list holds three kinds of [`Task`]: plain to-dos, deadlines (due on a day) and events (spanning a date range). \
//! Between runs it is persisted by [`Storage`](storage::Storage) as a flat, pipe-separated text file; corrupted lines in that file are skipped on load rather than aborting it. \
//! Defaults such as the storage location live in [`config`], and can be overridden through an optional JSON [`Settings`] file.
//!
//! The crate never reads or prints anything itself: a front-end (such as the bundled `corkboard` binary) feeds it one line at a time and shows the reply.

pub mod config;
pub mod settings;
pub use settings::Settings;
mod error;
pub use error::Error;
mod task;
pub use task::{Task, TaskKind};
mod tasklist;
pub use tasklist::TaskList;
pub mod storage;
pub use storage::Storage;
pub mod interpreter;
pub use interpreter::{CommandKind, Interpreter, Reply};
pub mod render;
