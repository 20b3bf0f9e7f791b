use std::io;
use std::path::PathBuf;

use crate::table::LookupError;
use crate::validation::ValidationError;
use thiserror::Error;

pub type TokenResult<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to read token config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse token config")]
    ParseConfig(#[from] serde_json::Error),
    #[error("invalid token table: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
