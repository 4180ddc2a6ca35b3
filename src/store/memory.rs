//! In-process result store.

use tracing::{debug, instrument};

use super::error::StoreError;
use super::record::{BreakRecord, MatchId, MatchRecord, NewMatchRecord, StoreData};
use super::ResultStore;

/// Result store held entirely in memory. Contents are lost on drop.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored matches.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }
}

impl ResultStore for MemoryStore {
    #[instrument(skip(self, record), fields(scoreline = %record.scoreline))]
    fn save_match(&mut self, record: NewMatchRecord) -> Result<MatchId, StoreError> {
        let id = self.data.insert_match(record);
        debug!(%id, "match stored in memory");
        Ok(id)
    }

    #[instrument(skip(self))]
    fn save_highest_break(
        &mut self,
        match_id: MatchId,
        player_name: &str,
        value: u32,
    ) -> Result<(), StoreError> {
        self.data.insert_break(match_id, player_name, value)
    }

    fn all_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.data.matches_newest_first())
    }

    fn breaks_for(&self, match_id: MatchId) -> Result<Vec<BreakRecord>, StoreError> {
        self.data.breaks_for(match_id)
    }

    #[instrument(skip(self))]
    fn delete_match(&mut self, match_id: MatchId) -> Result<(), StoreError> {
        self.data.remove_match(match_id)
    }
}
