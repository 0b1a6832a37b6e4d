//! Battle-pass progression domain.
//!
//! A season is a ladder of [`PassLevel`] rows; `xp_required` is cumulative.
//! A player's [`PassProgress`] climbs the ladder whenever their accumulated
//! XP reaches the next level's requirement.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// One rung of a season's ladder. `(season, level)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassLevel {
    pub season: String,
    pub level: i32,
    /// Cumulative XP needed to hold this level.
    pub xp_required: i64,
    /// Opaque reward payload shown by the client.
    pub reward: Option<serde_json::Value>,
}

/// A player's position in a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassProgress {
    pub user_id: UserId,
    pub season: String,
    pub current_level: i32,
    pub current_xp: i64,
}

impl PassProgress {
    /// Fresh progress at the bottom of the ladder.
    pub fn fresh(user_id: UserId, season: impl Into<String>) -> Self {
        Self {
            user_id,
            season: season.into(),
            current_level: 1,
            current_xp: 0,
        }
    }

    pub fn add_xp(&mut self, amount: i64) {
        self.current_xp += amount;
    }

    /// Climb to `next` if the accumulated XP meets its requirement.
    /// Returns whether the level was taken.
    pub fn try_level_up(&mut self, next: &PassLevel) -> bool {
        debug_assert_eq!(next.season, self.season);
        if next.level == self.current_level + 1 && self.current_xp >= next.xp_required {
            self.current_level = next.level;
            return true;
        }
        false
    }
}
