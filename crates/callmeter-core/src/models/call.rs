//! Call record model
//!
//! A completed call as fetched from the voice-assistant platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Call record
///
/// Owned by the caller and never mutated by the billing or filtering code.
/// Only `duration_seconds` and `start_time` take part in computations; the
/// rest is carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Platform call identifier
    #[serde(default)]
    pub id: String,

    /// Call duration in seconds (may be fractional)
    pub duration_seconds: f64,

    /// Call start timestamp
    pub start_time: DateTime<Utc>,

    /// Assistant that handled the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_name: Option<String>,

    /// Customer phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,

    /// Platform call status (e.g. "ended", "in-progress")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Why the call ended, as reported by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_reason: Option<String>,
}

impl CallRecord {
    /// Create a record with only the fields billing cares about
    pub fn new(duration_seconds: f64, start_time: DateTime<Utc>) -> Self {
        Self {
            duration_seconds,
            start_time,
            ..Default::default()
        }
    }
}

impl Default for CallRecord {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            duration_seconds: 0.0,
            start_time: Utc::now(),
            assistant_name: None,
            customer_number: None,
            status: None,
            ended_reason: None,
        }
    }
}
