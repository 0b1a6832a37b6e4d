//! Kalimah Application Orchestration Layer
//!
//! This crate contains the business-logic use cases that an HTTP (or other)
//! boundary layer composes. Each use case owns its port handles and exposes a
//! single `execute` entry point.

pub mod usecases;

pub use usecases::daily::GetDailyWord;
