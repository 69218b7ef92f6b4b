//! Error handling for the Switch CLI.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Custom error types for Switch operations.
///
/// Workflow-level errors (abort, IO, process) always escalate to the top of the
/// current command. Per-file rendering failures are wrapped in
/// [`crate::template::FileError`] instead and never abort a template operation.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The persisted Switchfile could not be parsed
    #[error("Failed to parse '{path}': {source}.")]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The Switchfile could not be serialized
    #[error("Failed to serialize configuration: {0}.")]
    ConfigSerializeError(serde_yaml::Error),

    /// The user declined a confirmation
    #[error("{0}")]
    UserAbort(String),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    TemplateRenderError(String),

    /// Errors reported by the MiniJinja engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// An external binary (`git`, `gh`, `az`) is missing or failed
    #[error("'{program}' failed: {message}")]
    ProcessError { program: String, message: String },

    /// Interactive prompt failure (terminal closed, not a tty, ...)
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// An exclusion pattern list could not be compiled
    #[error("Exclusion pattern error: {0}.")]
    ExclusionPatternError(#[from] regex::Error),

    /// The built-in ignore globs could not be compiled
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(#[from] globset::Error),

    /// Directory traversal failure
    #[error("Failed to read directory: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Malformed JSON (template data, external tool output)
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Builds a [`Error::ProcessError`] carrying a hint for the user.
    pub fn process<P: Into<String>, M: Into<String>>(program: P, message: M) -> Self {
        Error::ProcessError { program: program.into(), message: message.into() }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UserAbort(_) => 2,
            _ => 1,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler: prints the error and returns the exit code.
///
/// User aborts are reported as a plain message, everything else is prefixed
/// with `Error:`. No backtrace is ever printed.
pub fn default_error_handler(err: Error) -> ExitCode {
    match &err {
        Error::UserAbort(message) => eprintln!("{message}"),
        _ => eprintln!("Error: {err}"),
    }
    ExitCode::from(err.exit_code())
}
