//! Environment-variable configuration loader.
//!
//! Every field of [`AppConfig`] has a shipped default; the environment only
//! overrides. Malformed values fail loudly instead of falling back, so a
//! typo in `ROTATION_EPOCH` cannot silently change which word a day maps to.

use anyhow::{Context, Result};
use chrono::{FixedOffset, NaiveDate};

use kl_core::config::AppConfig;

pub fn load_from_env() -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Ok(value) = std::env::var("DATABASE_URL") {
        config.database_url = value;
    }
    if let Ok(value) = std::env::var("TOKEN_SECRET") {
        config.token_secret = value;
    }
    if let Ok(value) = std::env::var("ACCESS_TOKEN_TTL_MINUTES") {
        config.token_ttl_minutes = value
            .parse::<i64>()
            .context("parse ACCESS_TOKEN_TTL_MINUTES")?;
    }
    if let Ok(value) = std::env::var("ADMIN_UPLOAD_KEY") {
        config.admin_upload_key = value;
    }
    if let Ok(value) = std::env::var("REFERENCE_UTC_OFFSET") {
        config.reference_offset = value
            .parse::<FixedOffset>()
            .ok()
            .with_context(|| format!("parse REFERENCE_UTC_OFFSET {value:?} (expected ±HH:MM)"))?;
    }
    if let Ok(value) = std::env::var("ROTATION_EPOCH") {
        config.rotation_epoch = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .with_context(|| format!("parse ROTATION_EPOCH {value:?} (expected YYYY-MM-DD)"))?;
    }
    if let Ok(value) = std::env::var("BATTLEPASS_SEASON") {
        config.default_season = value;
    }

    Ok(config)
}
