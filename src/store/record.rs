//! Stored match history rows.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerPair};
use crate::rules::MatchResult;

use super::error::StoreError;

/// Identifier assigned to a stored match. Ids start at 1 and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u32);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished match about to be stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatchRecord {
    pub player_names: PlayerPair<String>,
    /// Final score formatted as `"s1 : s2"`.
    pub scoreline: String,
    pub date: NaiveDate,
}

impl NewMatchRecord {
    /// Build the row for a completed frame.
    #[must_use]
    pub fn from_result(names: &PlayerPair<String>, result: &MatchResult, date: NaiveDate) -> Self {
        Self {
            player_names: names.clone(),
            scoreline: result.scoreline(),
            date,
        }
    }
}

/// A stored match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub player_names: PlayerPair<String>,
    pub scoreline: String,
    pub date: NaiveDate,
}

impl MatchRecord {
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player]
    }
}

/// Highest break of a stored match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRecord {
    pub match_id: MatchId,
    pub player_name: String,
    pub value: u32,
}

/// Store contents shared by every backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreData {
    last_id: u32,
    matches: FxHashMap<MatchId, MatchRecord>,
    breaks: Vec<BreakRecord>,
}

impl StoreData {
    pub(crate) fn insert_match(&mut self, record: NewMatchRecord) -> MatchId {
        self.last_id += 1;
        let id = MatchId(self.last_id);
        self.matches.insert(
            id,
            MatchRecord {
                id,
                player_names: record.player_names,
                scoreline: record.scoreline,
                date: record.date,
            },
        );
        id
    }

    pub(crate) fn insert_break(
        &mut self,
        match_id: MatchId,
        player_name: &str,
        value: u32,
    ) -> Result<(), StoreError> {
        if !self.matches.contains_key(&match_id) {
            return Err(StoreError::NotFound(match_id));
        }
        self.breaks.push(BreakRecord {
            match_id,
            player_name: player_name.to_string(),
            value,
        });
        Ok(())
    }

    /// Newest date first; same-day matches newest id first.
    pub(crate) fn matches_newest_first(&self) -> Vec<MatchRecord> {
        let mut matches: Vec<_> = self.matches.values().cloned().collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        matches
    }

    pub(crate) fn breaks_for(&self, match_id: MatchId) -> Result<Vec<BreakRecord>, StoreError> {
        if !self.matches.contains_key(&match_id) {
            return Err(StoreError::NotFound(match_id));
        }
        Ok(self
            .breaks
            .iter()
            .filter(|b| b.match_id == match_id)
            .cloned()
            .collect())
    }

    /// Remove a match and its breaks.
    pub(crate) fn remove_match(&mut self, match_id: MatchId) -> Result<(), StoreError> {
        if self.matches.remove(&match_id).is_none() {
            return Err(StoreError::NotFound(match_id));
        }
        self.breaks.retain(|b| b.match_id != match_id);
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.matches.len()
    }
}
