//! Persistence for completed matches.
//!
//! A `ResultStore` receives each finished frame exactly once: the match
//! row first, then the highest break linked to it. Stored matches can be
//! listed newest first and deleted together with their breaks.

mod error;
mod file;
mod memory;
mod record;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{BreakRecord, MatchId, MatchRecord, NewMatchRecord};

/// Storage backend for match history.
pub trait ResultStore {
    /// Store a finished match and return its new id.
    fn save_match(&mut self, record: NewMatchRecord) -> Result<MatchId, StoreError>;

    /// Store the highest break of a stored match.
    ///
    /// Fails with [`StoreError::NotFound`] if the match does not exist.
    fn save_highest_break(
        &mut self,
        match_id: MatchId,
        player_name: &str,
        value: u32,
    ) -> Result<(), StoreError>;

    /// All stored matches, newest date first, then highest id first.
    fn all_matches(&self) -> Result<Vec<MatchRecord>, StoreError>;

    /// Breaks stored for one match.
    fn breaks_for(&self, match_id: MatchId) -> Result<Vec<BreakRecord>, StoreError>;

    /// Delete a match and every break linked to it.
    fn delete_match(&mut self, match_id: MatchId) -> Result<(), StoreError>;
}

impl<S: ResultStore + ?Sized> ResultStore for &mut S {
    fn save_match(&mut self, record: NewMatchRecord) -> Result<MatchId, StoreError> {
        (**self).save_match(record)
    }

    fn save_highest_break(
        &mut self,
        match_id: MatchId,
        player_name: &str,
        value: u32,
    ) -> Result<(), StoreError> {
        (**self).save_highest_break(match_id, player_name, value)
    }

    fn all_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        (**self).all_matches()
    }

    fn breaks_for(&self, match_id: MatchId) -> Result<Vec<BreakRecord>, StoreError> {
        (**self).breaks_for(match_id)
    }

    fn delete_match(&mut self, match_id: MatchId) -> Result<(), StoreError> {
        (**self).delete_match(match_id)
    }
}
