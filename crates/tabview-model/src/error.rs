use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid field path: {0:?}")]
    InvalidFieldPath(String),
    #[error("record must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

pub type Result<T> = std::result::Result<T, ModelError>;
