//! Process bootstrap: logging, database pool, adapter wiring.

pub mod tracing;

use std::sync::Arc;

use anyhow::{Context, Result};

use kl_app::usecases::auth::TokenSigner;
use kl_core::config::AppConfig;
use kl_core::ports::{
    ClockPort, OverrideStorePort, PassRepositoryPort, TeamRepositoryPort, UserRepositoryPort,
    WordCatalogPort,
};
use kl_infra::db::repositories::{
    DieselOverrideStore, DieselPassRepository, DieselTeamRepository, DieselUserRepository,
    DieselWordCatalog,
};
use kl_infra::db::init_db_pool;
use kl_infra::SystemClock;

/// Wired adapters shared by every CLI command.
pub struct AppContext {
    pub config: AppConfig,
    pub catalog: Arc<dyn WordCatalogPort>,
    pub overrides: Arc<dyn OverrideStorePort>,
    pub users: Arc<dyn UserRepositoryPort>,
    pub teams: Arc<dyn TeamRepositoryPort>,
    pub passes: Arc<dyn PassRepositoryPort>,
    pub clock: Arc<dyn ClockPort>,
    pub signer: Arc<TokenSigner>,
}

impl AppContext {
    pub fn build(config: AppConfig) -> Result<Self> {
        let pool = init_db_pool(&config.database_url)
            .with_context(|| format!("open database {}", config.database_url))?;

        let signer = Arc::new(TokenSigner::new(
            &config.token_secret,
            config.token_ttl_minutes,
        ));

        Ok(Self {
            catalog: Arc::new(DieselWordCatalog::new(pool.clone())),
            overrides: Arc::new(DieselOverrideStore::new(pool.clone())),
            users: Arc::new(DieselUserRepository::new(pool.clone())),
            teams: Arc::new(DieselTeamRepository::new(pool.clone())),
            passes: Arc::new(DieselPassRepository::new(pool.clone())),
            clock: Arc::new(SystemClock),
            signer,
            config,
        })
    }
}
