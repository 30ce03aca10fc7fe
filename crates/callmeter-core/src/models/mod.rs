//! Domain models for CallMeter
//!
//! This module contains the core domain models shared by the billing
//! computations and the HTTP layer.

pub mod call;
pub mod date_range;
pub mod usage;

pub use call::CallRecord;
pub use date_range::DateRange;
pub use usage::{UsagePlan, UsageStatus, UsageSummary, MAX_OVERAGE_RATE};
