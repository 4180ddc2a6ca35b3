use thiserror::Error;

use super::record::MatchId;

/// Failures from a result store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("no stored match with id {0}")]
    NotFound(MatchId),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
