//! Best score tracking and medals
//!
//! The best score lives in a `PersistentStore` under `BEST_SCORE_KEY`.
//! Medals are a pure function of the final score.

use serde::{Deserialize, Serialize};

use crate::BEST_SCORE_KEY;
use crate::persistence::PersistentStore;

/// Medal tiers shown on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }
}

/// Lower bounds of each medal band. A band runs from its bound up to (not
/// including) the next tier's bound; platinum is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalBands {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
    pub platinum: u32,
}

impl Default for MedalBands {
    fn default() -> Self {
        Self {
            bronze: 10,
            silver: 20,
            gold: 30,
            platinum: 50,
        }
    }
}

/// Medal earned by `score`, if any. The highest tier whose bound is reached wins.
pub fn medal_for(score: u32, bands: &MedalBands) -> Option<Medal> {
    if score >= bands.platinum {
        Some(Medal::Platinum)
    } else if score >= bands.gold {
        Some(Medal::Gold)
    } else if score >= bands.silver {
        Some(Medal::Silver)
    } else if score >= bands.bronze {
        Some(Medal::Bronze)
    } else {
        None
    }
}

/// Persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub best: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the best score; absent or out-of-range values count as zero
    pub fn load(store: &dyn PersistentStore) -> Self {
        let best = store
            .get_integer(BEST_SCORE_KEY)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        log::info!("Best score: {}", best);
        Self { best }
    }

    /// Check whether `score` would become the new best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Fold a finished round into the record, persisting a new best.
    /// Returns true when `score` beat the previous best.
    pub fn record(&mut self, score: u32, store: &mut dyn PersistentStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.set_integer(BEST_SCORE_KEY, i64::from(score));
        log::info!("New best score: {}", score);
        true
    }
}
