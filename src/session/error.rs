use thiserror::Error;

use crate::core::ConfigError;
use crate::store::StoreError;

/// Failures surfaced by a `MatchSession`.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("could not save match result: {0}")]
    Store(#[from] StoreError),

    #[error("the frame is still in play")]
    NotFinished,
}
