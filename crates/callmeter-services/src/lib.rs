//! Business logic for CallMeter
//!
//! Two stateless modules sit on top of the fetched call records:
//!
//! - `billing` - billable minutes, usage percentage and status, overage
//!   charges and the display strings built from them
//! - `date_filter` - turns a [`DateRange`](callmeter_core::models::DateRange)
//!   selector into a cutoff, a filtered call list, a backend day count or a
//!   label
//!
//! Neither module reads the clock or touches I/O; "now" is always passed in.

pub mod billing;
pub mod date_filter;

pub use billing::{
    billable_minutes, format_billing_period, format_currency, format_duration, overage_cost,
    overage_minutes, summarize_usage, total_billable_minutes, usage_percentage, usage_status,
};
pub use date_filter::{cutoff, filter_calls_by_date, range_label, range_to_day_count};

/// Business logic constants
pub mod constants {
    /// Usage percentage at which the status leaves `success`
    pub const WARNING_THRESHOLD_PERCENT: u8 = 70;

    /// Usage percentage at which the status becomes `danger`
    pub const DANGER_THRESHOLD_PERCENT: u8 = 90;

    /// Seconds per billable minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
