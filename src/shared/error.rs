use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a model that misses the
/// requested openness class from a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every model met the threshold (or no threshold was set)
    Success = 0,
    /// At least one model did not reach the requested openness class
    ThresholdNotMet = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog error, unreadable model file, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn description(self) -> &'static str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::ThresholdNotMet => "Threshold Not Met",
            ExitCode::InvalidArguments => "Invalid Arguments",
            ExitCode::ApplicationError => "Application Error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}

/// Application-specific errors for model evaluation.
#[derive(Debug, Error)]
pub enum MotError {
    #[error("Unable to evaluate: no model set.\n\n💡 Hint: Pass at least one model file to evaluate")]
    NoModelSet,

    #[error("Invalid class: {value}\n\n💡 Hint: Specify class 1, 2 or 3")]
    InvalidClass { value: i64 },

    #[error("Unknown component: \"{name}\"\n\n💡 Hint: Component names must match an entry of the component catalog")]
    UnknownComponent { name: String },

    #[error("Invalid {catalog} catalog: {details}\n\n💡 Hint: Please verify the catalog file contents")]
    InvalidCatalog { catalog: String, details: String },

    #[error("Failed to parse model file: {path}\nDetails: {details}\n\n💡 Hint: Model files must be YAML or JSON release documents")]
    ModelParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
