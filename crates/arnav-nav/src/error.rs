use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown navigation command {0:?}")]
    UnknownCommand(String),
}

pub type NavResult<T> = Result<T, NavError>;
