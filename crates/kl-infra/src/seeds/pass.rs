//! Battle-pass ladder seeding.

use anyhow::Result;
use tracing::info;

use kl_core::battlepass::PassLevel;
use kl_core::ports::PassRepositoryPort;

/// Default ladder: levels 2..=`top_level` with a flat cumulative step.
///
/// Level 1 is implicit (fresh progress starts there), so no row is produced
/// for it.
pub fn default_pass_levels(season: &str, top_level: i32, xp_step: i64) -> Vec<PassLevel> {
    (2..=top_level)
        .map(|level| PassLevel {
            season: season.to_string(),
            level,
            xp_required: i64::from(level - 1) * xp_step,
            reward: None,
        })
        .collect()
}

/// Insert a season ladder. Fails if the season was already seeded.
pub async fn seed_pass_levels(
    passes: &dyn PassRepositoryPort,
    levels: Vec<PassLevel>,
) -> Result<usize> {
    let inserted = passes.insert_levels(levels).await?;
    info!(inserted, "battle pass ladder seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_starts_at_level_two_with_cumulative_steps() {
        let levels = default_pass_levels("S1", 5, 100);
        assert_eq!(levels.len(), 4);
        assert_eq!(levels[0].level, 2);
        assert_eq!(levels[0].xp_required, 100);
        assert_eq!(levels[3].level, 5);
        assert_eq!(levels[3].xp_required, 400);
    }

    #[test]
    fn top_level_below_two_yields_empty_ladder() {
        assert!(default_pass_levels("S1", 1, 100).is_empty());
    }
}
