//! Call filtering DTOs

use callmeter_core::models::{CallRecord, DateRange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /calls/filter`
#[derive(Debug, Clone, Deserialize)]
pub struct FilterCallsRequest {
    /// Calls to filter
    pub calls: Vec<CallRecord>,

    /// Range selector (default "all")
    #[serde(default)]
    pub range: DateRange,
}

/// A call with its billing display fields
#[derive(Debug, Clone, Serialize)]
pub struct BilledCall {
    /// Original call record
    #[serde(flatten)]
    pub call: CallRecord,

    /// Billable minutes for this call
    pub billable_minutes: i64,

    /// Duration rendered as MM:SS
    pub duration_display: String,
}

/// Response body for `POST /calls/filter`
#[derive(Debug, Clone, Serialize)]
pub struct FilterCallsResponse {
    /// Range applied
    pub range: DateRange,

    /// Display label of the range
    pub range_label: String,

    /// Earliest included instant, absent for "all"
    pub cutoff: Option<DateTime<Utc>>,

    /// Number of calls kept
    pub total: usize,

    /// Sum of billable minutes over the kept calls
    pub total_billable_minutes: i64,

    /// Kept calls, in their original order
    pub calls: Vec<BilledCall>,
}
