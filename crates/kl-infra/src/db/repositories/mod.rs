pub mod override_repo;
pub mod pass_repo;
pub mod team_repo;
pub mod user_repo;
pub mod word_catalog_repo;

pub use override_repo::DieselOverrideStore;
pub use pass_repo::DieselPassRepository;
pub use team_repo::DieselTeamRepository;
pub use user_repo::DieselUserRepository;
pub use word_catalog_repo::DieselWordCatalog;
