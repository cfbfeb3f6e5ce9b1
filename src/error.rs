//! Error handling for the Kickstart application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Kickstart operations.
///
/// This enum represents all possible errors that can occur while scaffolding
/// a project. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while processing template content
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors in the scaffold configuration or its mapping
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The destination directory already contains entries
    #[error("destination directory '{destination}' is not empty")]
    DestinationNotEmpty { destination: String },

    /// The destination path exists but is not a directory
    #[error("destination '{destination}' exists and is not a directory")]
    DestinationNotADirectory { destination: String },

    /// Represents errors in compiling the default ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnorePatternError(String),

    /// Represents failures while initializing the git repository
    #[error("Git error: {0}.")]
    GitError(String),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
