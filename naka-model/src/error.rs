use std::fmt::{self, Display};

/// Errors produced by the strict data loaders.
///
/// The public `load_*` entry points swallow these and return empty
/// collections; the `try_load_*` variants surface them so callers can
/// log what went wrong.
#[derive(Debug)]
pub enum ModelError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Parse(err) => write!(f, "parse error: {err}"),
            ModelError::Invalid(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Parse(err) => Some(err),
            ModelError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Parse(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
