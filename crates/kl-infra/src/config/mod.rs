pub mod env;

pub use env::load_from_env;
