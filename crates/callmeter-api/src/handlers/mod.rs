//! HTTP request handlers

pub mod calls;
pub mod health;
pub mod ranges;
pub mod usage;

pub use calls::configure as configure_calls;
pub use health::health_check;
pub use ranges::configure as configure_ranges;
pub use usage::configure as configure_usage;
