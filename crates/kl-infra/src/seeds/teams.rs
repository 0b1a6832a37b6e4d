//! Launch team roster.

use anyhow::Result;
use tracing::info;

use kl_core::ports::TeamRepositoryPort;

/// The thirteen teams the game launched with.
const LAUNCH_TEAMS: [(&str, &str); 13] = [
    ("T01", "Team Falcon"),
    ("T02", "Team Oasis"),
    ("T03", "Team Dune"),
    ("T04", "Team Crescent"),
    ("T05", "Team Palm"),
    ("T06", "Team Mirage"),
    ("T07", "Team Sandstorm"),
    ("T08", "Team Desert Rose"),
    ("T09", "Team Caravan"),
    ("T10", "Team Minaret"),
    ("T11", "Team Date"),
    ("T12", "Team Saffron"),
    ("T13", "Team Spice"),
];

/// Insert any launch team that is not present yet. Idempotent.
pub async fn seed_launch_teams(teams: &dyn TeamRepositoryPort) -> Result<usize> {
    let mut inserted = 0;
    for (code, name) in LAUNCH_TEAMS {
        if teams.insert_if_absent(code, name).await? {
            inserted += 1;
        }
    }
    info!(inserted, "launch teams seeded");
    Ok(inserted)
}
