//! API layer for CallMeter
//!
//! HTTP handlers exposing usage summaries, date filtering and range metadata
//! to the dashboard frontend.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export DTOs (common types)
pub use dto::ApiResponse;
pub use state::AppState;
