//! Battle-pass progression use cases.

pub mod get_progress;
pub mod grant_xp;

pub use get_progress::{GetPassProgress, ProgressView};
pub use grant_xp::GrantPassXp;
