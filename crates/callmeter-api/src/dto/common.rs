//! Common DTOs used across the API

use callmeter_core::models::DateRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }
}

/// Resolved date range metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeInfo {
    /// Selector as sent by the client
    pub range: DateRange,
    /// Day count for backend queries (0 = unbounded)
    pub day_count: u32,
    /// Display label
    pub label: String,
    /// Earliest included instant, absent for "all"
    pub cutoff: Option<DateTime<Utc>>,
}
