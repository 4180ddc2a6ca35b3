//! File-backed result store.
//!
//! The whole store is one bincode snapshot. Every mutation rewrites it
//! through a temporary sibling file and a rename, so a crash mid-write
//! leaves the previous snapshot intact.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::error::StoreError;
use super::record::{BreakRecord, MatchId, MatchRecord, NewMatchRecord, StoreData};
use super::ResultStore;

/// Result store persisted to a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: StoreData,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or decoded.
    #[instrument(skip(path), fields(store_path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let bytes = fs::read(&path)?;
            bincode::deserialize(&bytes)?
        } else {
            debug!("no store file yet, starting empty");
            StoreData::default()
        };

        info!(matches = data.len(), "result store opened");
        Ok(Self { path, data })
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.data)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            warn!(error = %e, "failed to replace store file");
            StoreError::Io(e)
        })
    }

    /// Run a mutation and write it out. On a failed write the in-memory
    /// contents are rolled back so they keep matching the file.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut StoreData) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let before = self.data.clone();
        let out = change(&mut self.data)?;
        if let Err(e) = self.flush() {
            self.data = before;
            return Err(e);
        }
        Ok(out)
    }
}

impl ResultStore for FileStore {
    #[instrument(skip(self, record), fields(scoreline = %record.scoreline))]
    fn save_match(&mut self, record: NewMatchRecord) -> Result<MatchId, StoreError> {
        let id = self.commit(|data| Ok(data.insert_match(record)))?;
        info!(%id, "match result saved");
        Ok(id)
    }

    #[instrument(skip(self))]
    fn save_highest_break(
        &mut self,
        match_id: MatchId,
        player_name: &str,
        value: u32,
    ) -> Result<(), StoreError> {
        self.commit(|data| data.insert_break(match_id, player_name, value))?;
        info!("highest break saved");
        Ok(())
    }

    fn all_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        Ok(self.data.matches_newest_first())
    }

    fn breaks_for(&self, match_id: MatchId) -> Result<Vec<BreakRecord>, StoreError> {
        self.data.breaks_for(match_id)
    }

    #[instrument(skip(self))]
    fn delete_match(&mut self, match_id: MatchId) -> Result<(), StoreError> {
        self.commit(|data| data.remove_match(match_id))?;
        info!("match deleted");
        Ok(())
    }
}
