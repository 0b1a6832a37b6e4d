//! Tracing configuration for the Kalimah binary.
//!
//! Structured logging with spans: use cases open `info_span`s and the
//! subscriber here renders them to stdout. `RUST_LOG` overrides the default
//! filter.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Build the default filter directives
///
/// - Development builds: debug level for the workspace crates
/// - Release builds: info level across the board
fn build_filter_directives() -> String {
    if cfg!(debug_assertions) {
        "info,kl_app=debug,kl_infra=debug".to_string()
    } else {
        "info".to_string()
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives()));

    registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
