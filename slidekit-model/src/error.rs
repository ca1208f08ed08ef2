use std::fmt::{self, Display};

/// Errors produced when parsing model values from their attribute spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownLayout(String),
    UnknownInitialPolicy(String),
    UnknownKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownLayout(raw) => {
                write!(f, "unknown carousel layout '{raw}'")
            }
            ModelError::UnknownInitialPolicy(raw) => {
                write!(f, "unknown initial slide policy '{raw}'")
            }
            ModelError::UnknownKind(raw) => {
                write!(f, "unknown carousel type '{raw}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
