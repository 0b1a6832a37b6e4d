mod bootstrap;
mod cli;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    bootstrap::tracing::init_tracing();

    let cli = Cli::parse();
    let config = kl_infra::config::load_from_env()?;
    let context = bootstrap::AppContext::build(config)?;

    cli.run(&context).await
}
