//! CallMeter Core Library
//!
//! This crate provides the foundational types, clock abstraction, and error
//! handling for the CallMeter system. It includes:
//!
//! - Domain models (call records, usage plans and summaries, date ranges)
//! - An injectable clock so "now" is never read implicitly
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod clock;
pub mod config;
pub mod error;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
