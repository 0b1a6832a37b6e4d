use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum OverrideStoreError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("user not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum TeamRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum PassRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),
}
