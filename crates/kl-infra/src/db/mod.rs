pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

pub use pool::{init_db_pool, DbPool};
