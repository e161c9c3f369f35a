use std::any::Any;

use thiserror::Error;

/// The four kinds of failure a user action can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Fetch,
    Parse,
    Write,
}

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch page: {0}")]
    Fetch(String),

    #[error("Failed to read PDF: {0}")]
    Parse(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl ExtractorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractorError::Validation(_) | ExtractorError::Regex(_) => ErrorKind::Validation,
            ExtractorError::Fetch(_) | ExtractorError::Http(_) => ErrorKind::Fetch,
            ExtractorError::Parse(_) => ErrorKind::Parse,
            ExtractorError::Write(_) | ExtractorError::Io(_) => ErrorKind::Write,
        }
    }
}

impl From<std::io::Error> for ExtractorError {
    fn from(error: std::io::Error) -> Self {
        ExtractorError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for ExtractorError {
    fn from(error: reqwest::Error) -> Self {
        ExtractorError::Http(Box::new(error))
    }
}

/// Best-effort text of a caught panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
