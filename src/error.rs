//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Errors raised by the paramdoc library"
#[derive(Debug, Error)]
pub enum ParamDocError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ParamDocError>;
