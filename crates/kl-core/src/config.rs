//! Application configuration DTO (pure data, no loading logic).
//!
//! The infrastructure layer fills this from the environment; defaults here
//! are the values the game shipped with.

use chrono::{FixedOffset, NaiveDate};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database location.
    pub database_url: String,

    /// Secret for access-token signing.
    pub token_secret: String,

    /// Access-token lifetime in minutes.
    pub token_ttl_minutes: i64,

    /// Key an administrator must present for bulk word uploads.
    pub admin_upload_key: String,

    /// Fixed reference offset defining "today" for all players.
    pub reference_offset: FixedOffset,

    /// Epoch the rotation counts days from.
    pub rotation_epoch: NaiveDate,

    /// Season new battle-pass progress rows are opened in.
    pub default_season: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "kalimah.db".to_string(),
            token_secret: "dev".to_string(),
            token_ttl_minutes: 43_200,
            admin_upload_key: String::new(),
            // Riyadh; the shipped zone has no DST so a fixed offset is exact.
            reference_offset: FixedOffset::east_opt(3 * 3600).expect("offset in range"),
            rotation_epoch: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid epoch"),
            default_season: "S1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_game_settings() {
        let config = AppConfig::default();
        assert_eq!(config.reference_offset.local_minus_utc(), 3 * 3600);
        assert_eq!(config.rotation_epoch.to_string(), "2025-01-01");
        assert_eq!(config.default_season, "S1");
        assert_eq!(config.token_ttl_minutes, 43_200);
    }
}
