use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;

#[derive(Debug)]
pub enum LibraryError {
    // Caller supplied data that breaks a catalog rule, e.g. a book without a name.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    // Storage faults only; never used for caller mistakes.
    Internal {
        message: String,
    },
}

impl LibraryError {
    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn internal(message: &str) -> LibraryError {
        LibraryError::Internal { message: message.to_string() }
    }
}

impl<T> From<PoisonError<T>> for LibraryError {
    fn from(err: PoisonError<T>) -> Self {
        LibraryError::internal(
            format!("book store lock poisoned {}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl From<config::ConfigError> for LibraryError {
    fn from(err: config::ConfigError) -> Self {
        LibraryError::internal(
            format!("failed to load configuration {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Internal { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
