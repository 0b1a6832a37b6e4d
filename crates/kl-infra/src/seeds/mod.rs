//! Seed data loaders for operational bootstrap.

pub mod pass;
pub mod teams;
pub mod words;

pub use pass::{default_pass_levels, seed_pass_levels};
pub use teams::seed_launch_teams;
pub use words::read_word_file;
