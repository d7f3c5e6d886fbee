//! The error taxonomy of this crate

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while handling a command or touching the
/// storage file.
///
/// None of these is fatal: user-input errors are rendered back to the user
/// and the interpreter keeps accepting input, persistence errors are reported
/// to the caller who decides how loudly to complain.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or incomplete command text: an unknown verb, a missing or
    /// non-numeric task number, a date that is not `YYYY-MM-DD`...
    /// The message is ready to show to the user as-is.
    #[error("{0}")]
    UserInput(String),

    /// The storage or settings file (or its directory) could not be read,
    /// created or written.
    #[error("unable to access {path:?}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn user<S: Into<String>>(message: S) -> Self {
        Error::UserInput(message.into())
    }
}
