//! Ops CLI for the Kalimah backend.
//!
//! The HTTP boundary is a separate deployment concern; this binary drives the
//! same use cases for operations work: inspecting the daily word, loading the
//! catalog, seeding reference data, and managing overrides.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use kl_app::usecases::auth::{RegisterInput, RegisterUser};
use kl_app::usecases::battlepass::GrantPassXp;
use kl_app::usecases::daily::{ClearDailyOverride, GetDailyWord, SetDailyOverride};
use kl_app::usecases::teams::ListTeams;
use kl_core::ids::{UserId, WordId};
use kl_infra::seeds;

use crate::bootstrap::AppContext;

#[derive(Parser)]
#[command(name = "kalimah", about = "Ops CLI for the Kalimah daily word backend")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the word of the day
    Daily {
        /// Explicit date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },
    /// Bulk-load words from a JSON file into the catalog
    LoadWords { file: PathBuf },
    /// Insert the launch team roster (idempotent)
    SeedTeams,
    /// Insert a battle-pass ladder for the configured season
    SeedPass {
        #[arg(long, default_value_t = 50)]
        top_level: i32,
        #[arg(long, default_value_t = 100)]
        xp_step: i64,
    },
    /// Pin a date to a specific word
    SetOverride { date: String, word_id: i64 },
    /// Remove the pin for a date
    ClearOverride { date: String },
    /// List the teams players can join
    ListTeams,
    /// Create an account (e.g. for smoke-testing a deployment)
    Register {
        email: String,
        password: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        team: Option<String>,
    },
    /// Grant battle-pass XP to a user
    GrantXp { user_id: i64, amount: i64 },
}

impl Cli {
    pub async fn run(self, context: &AppContext) -> Result<()> {
        match self.command {
            Command::Daily { date } => {
                let usecase = GetDailyWord::new(
                    Arc::clone(&context.catalog),
                    Arc::clone(&context.overrides),
                    Arc::clone(&context.clock),
                    &context.config,
                );
                let selection = usecase.execute(date.as_deref()).await?;
                let out = serde_json::json!({
                    "date": selection.day.to_string(),
                    "index": selection.index,
                    "word": selection.word(),
                    "definition": selection.definition(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Command::LoadWords { file } => {
                let entries = seeds::read_word_file(&file)?;
                for entry in &entries {
                    entry.validate()?;
                }
                let inserted = context.catalog.insert_many(entries).await?;
                println!("inserted {inserted} words");
            }
            Command::SeedTeams => {
                let inserted = seeds::seed_launch_teams(context.teams.as_ref()).await?;
                println!("inserted {inserted} teams");
            }
            Command::SeedPass { top_level, xp_step } => {
                let season = &context.config.default_season;
                let levels = seeds::default_pass_levels(season, top_level, xp_step);
                let inserted = seeds::seed_pass_levels(context.passes.as_ref(), levels).await?;
                println!("inserted {inserted} levels for season {season}");
            }
            Command::SetOverride { date, word_id } => {
                let usecase = SetDailyOverride::new(
                    Arc::clone(&context.catalog),
                    Arc::clone(&context.overrides),
                );
                usecase.execute(&date, WordId::new(word_id)).await?;
                println!("pinned {date} to word {word_id}");
            }
            Command::ClearOverride { date } => {
                let usecase = ClearDailyOverride::new(Arc::clone(&context.overrides));
                let removed = usecase.execute(&date).await?;
                println!(
                    "{}",
                    if removed {
                        "override removed"
                    } else {
                        "no override was set"
                    }
                );
            }
            Command::ListTeams => {
                let usecase = ListTeams::new(Arc::clone(&context.teams));
                for team in usecase.execute().await? {
                    println!("{}\t{}", team.code, team.name);
                }
            }
            Command::Register {
                email,
                password,
                display_name,
                team,
            } => {
                let usecase = RegisterUser::new(
                    Arc::clone(&context.users),
                    Arc::clone(&context.teams),
                    Arc::clone(&context.clock),
                    Arc::clone(&context.signer),
                );
                let outcome = usecase
                    .execute(RegisterInput {
                        email,
                        password,
                        display_name,
                        team_code: team,
                    })
                    .await?;
                println!("user {} created", outcome.user.id);
                println!("{}", outcome.token);
            }
            Command::GrantXp { user_id, amount } => {
                let usecase = GrantPassXp::new(
                    Arc::clone(&context.passes),
                    context.config.default_season.clone(),
                );
                let progress = usecase.execute(&UserId::new(user_id), amount).await?;
                println!("{}", serde_json::to_string_pretty(&progress)?);
            }
        }
        Ok(())
    }
}
