//! Business logic use cases.

pub mod auth;
pub mod battlepass;
pub mod daily;
pub mod teams;
pub mod users;
pub mod words;
