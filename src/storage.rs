//! Loading and saving the task list to a flat text file.
//!
//! The file is UTF-8 text, one record per line, fields separated by the
//! literal three-character sequence ` | `:
//!
//! ```text
//! T | 0 | buy milk
//! D | 1 | return book | 2025-03-01
//! E | 0 | book fair | 2025-03-01 | 2025-03-03
//! ```
//!
//! The third field is always taken as the whole description, so a
//! description that itself contains ` | ` does not survive a round trip.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::settings::Settings;
use crate::task::Task;
use crate::tasklist::TaskList;

/// The field separator of storage records
const SEPARATOR: &str = " | ";

/// Reads and writes the task list at a fixed path
#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// A storage on the path the given settings resolve to
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every recoverable task from the backing file.
    ///
    /// A missing file is not an error: it yields an empty list. A corrupted
    /// line (too few fields, unknown kind letter, unparsable date) is
    /// skipped with a warning so a partially damaged file still loads
    /// everything salvageable. Any other I/O failure is returned.
    pub fn load(&self) -> Result<TaskList, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Err(ref err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TaskList::new());
            }
            Err(err) => return Err(self.io_error(err)),
            Ok(contents) => contents,
        };

        let mut tasks = Vec::new();
        for (line_no, line) in contents.lines().enumerate() {
            match parse_record(line) {
                Some(task) => tasks.push(task),
                None => log::warn!(
                    "Skipping corrupted record at {:?} line {}",
                    self.path,
                    line_no + 1
                ),
            }
        }
        Ok(TaskList::from_tasks(tasks))
    }

    /// Write the whole list to the backing file, replacing any previous
    /// contents. The parent directory is created on demand. The payload is
    /// assembled in memory first and written in a single call, so a failure
    /// to serialize can never leave a half-written file behind.
    pub fn save(&self, tasks: &TaskList) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let mut contents = String::new();
        for task in tasks.tasks() {
            contents.push_str(&task.file_record());
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|err| self.io_error(err))
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}

/// Parse one storage line into a task, or `None` if the record is corrupt
fn parse_record(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() < 3 {
        return None;
    }

    let description = fields[2];
    let mut task = match fields[0] {
        "T" => Task::todo(description),
        "D" => Task::deadline(description, fields.get(3)?).ok()?,
        "E" => Task::event(description, fields.get(3)?, fields.get(4)?).ok()?,
        _ => return None,
    };

    if fields[1] == "1" {
        task.mark_done();
    }
    Some(task)
}
