use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid date `{value}`: {reason}")]
    Parse { value: String, reason: String },
    #[error("{0} is not supported")]
    NotSupported(&'static str),
    #[error("response cannot be shaped into a table: {0}")]
    NotTabular(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn parse<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        AppError::Parse {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
