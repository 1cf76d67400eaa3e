//! Per-family vote tallies

use super::rules::TieBreak;
use crate::catalog::{Catalog, Family};
use serde::{Deserialize, Serialize};

/// Vote count of a single outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub outcome_id: String,
    pub votes: u32,
}

/// Running vote counts for one family (Value Object)
///
/// Always holds exactly one entry per outcome of the family, in catalog
/// declaration order. Counts only ever increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    family: Family,
    entries: Vec<TallyEntry>,
}

impl Tally {
    /// Zero-initialized tally for the given outcome ids
    pub fn zeroed<'a>(family: Family, outcome_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            family,
            entries: outcome_ids
                .into_iter()
                .map(|id| TallyEntry {
                    outcome_id: id.to_string(),
                    votes: 0,
                })
                .collect(),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    pub fn outcome_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.outcome_id.as_str())
    }

    pub fn votes(&self, outcome_id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.outcome_id == outcome_id)
            .map(|e| e.votes)
    }

    /// Add one vote. Returns false if the outcome is not part of this tally.
    pub fn increment(&mut self, outcome_id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.outcome_id == outcome_id) {
            Some(entry) => {
                entry.votes += 1;
                true
            }
            None => false,
        }
    }

    /// Highest vote count, or `None` for an empty tally
    pub fn max_votes(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.votes).max()
    }

    /// Outcomes sharing the maximum count, in declaration order
    pub fn leaders(&self) -> Vec<&str> {
        match self.max_votes() {
            Some(max) => self
                .entries
                .iter()
                .filter(|e| e.votes == max)
                .map(|e| e.outcome_id.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Two or more outcomes share the maximum count
    pub fn is_tied(&self) -> bool {
        self.leaders().len() > 1
    }

    /// The strictly highest outcome, if there is one
    pub fn strict_winner(&self) -> Option<&str> {
        match self.leaders().as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }

    /// Winner with ties resolved by `tie_break`
    pub fn winner(&self, tie_break: TieBreak) -> Option<&str> {
        tie_break.pick(&self.leaders())
    }

    /// Entries with at least one vote, highest first (stable for equal counts)
    pub fn ranked(&self) -> Vec<&TallyEntry> {
        let mut ranked: Vec<_> = self.entries.iter().filter(|e| e.votes > 0).collect();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
        ranked
    }

    /// Compact "id=votes" listing of non-zero entries for diagnostics
    pub fn summary(&self) -> String {
        self.ranked()
            .iter()
            .map(|e| format!("{}={}", e.outcome_id, e.votes))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Tallies for all three families
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    tallies: [Tally; 3],
}

impl Scores {
    /// Zero tallies covering every outcome known to the catalog
    pub fn zeroed(catalog: &Catalog) -> Self {
        Self {
            tallies: Family::ALL.map(|family| Tally::zeroed(family, catalog.outcome_ids(family))),
        }
    }

    pub fn tally(&self, family: Family) -> &Tally {
        &self.tallies[family.index()]
    }

    pub fn tally_mut(&mut self, family: Family) -> &mut Tally {
        &mut self.tallies[family.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tally> {
        self.tallies.iter()
    }

    /// Families currently tied for first place
    pub fn tied_families(&self) -> Vec<Family> {
        self.tallies
            .iter()
            .filter(|t| t.is_tied())
            .map(Tally::family)
            .collect()
    }

    pub fn any_tied(&self) -> bool {
        self.tallies.iter().any(Tally::is_tied)
    }
}
