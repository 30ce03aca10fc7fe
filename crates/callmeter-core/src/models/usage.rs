//! Usage plan and summary models

use crate::error::AppError;
use crate::AppResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Highest accepted charge per overage minute
pub const MAX_OVERAGE_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Included quota and overage pricing for a billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePlan {
    /// Minutes included before overage applies
    pub included_minutes: i64,

    /// Charge per overage minute
    pub overage_rate: Decimal,
}

impl UsagePlan {
    /// Build a plan, rejecting negative quotas and rates outside
    /// `0..=MAX_OVERAGE_RATE`
    pub fn new(included_minutes: i64, overage_rate: Decimal) -> AppResult<Self> {
        if included_minutes < 0 {
            return Err(AppError::Validation(format!(
                "included minutes must not be negative, got {}",
                included_minutes
            )));
        }
        if overage_rate < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "overage rate must not be negative, got {}",
                overage_rate
            )));
        }
        if overage_rate > MAX_OVERAGE_RATE {
            return Err(AppError::Validation(format!(
                "overage rate must not exceed {}, got {}",
                MAX_OVERAGE_RATE, overage_rate
            )));
        }

        Ok(Self {
            included_minutes,
            overage_rate,
        })
    }
}

/// Usage health band shown next to the usage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageStatus {
    Success,
    Warning,
    Danger,
}

impl UsageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Derived usage for a set of calls against a plan
///
/// Recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub used_minutes: i64,
    pub included_minutes: i64,
    pub overage_minutes: i64,
    pub overage_cost: Decimal,
    /// Whole percent of the quota used, clamped to 0..=100
    pub percentage: u8,
    pub status: UsageStatus,
}

impl UsageSummary {
    /// Minutes left before overage starts
    pub fn remaining_minutes(&self) -> i64 {
        (self.included_minutes - self.used_minutes).max(0)
    }

    #[inline]
    pub fn is_over_quota(&self) -> bool {
        self.overage_minutes > 0
    }
}
