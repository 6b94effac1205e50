use arnav_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{0} points exceed the PoiId range")]
    TooManyPoints(usize),
}

pub type SimResult<T> = Result<T, SimError>;
