//! Usage summary DTOs

use callmeter_core::{
    models::{CallRecord, DateRange, UsagePlan, UsageSummary},
    AppError, AppResult,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /usage/summary`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UsageSummaryRequest {
    /// Calls of the billing period
    pub calls: Vec<CallRecord>,

    /// Restrict the calls before summarizing (default "all")
    #[serde(default)]
    pub range: DateRange,

    /// Override of the configured included minutes
    #[validate(range(min = 0))]
    pub included_minutes: Option<i64>,

    /// Override of the configured overage rate
    pub overage_rate: Option<Decimal>,

    /// First day of the billing period
    pub period_start: Option<NaiveDate>,

    /// Last day of the billing period
    pub period_end: Option<NaiveDate>,
}

impl UsageSummaryRequest {
    /// Resolve the plan from request overrides on top of `default`
    pub fn plan(&self, default: &UsagePlan) -> AppResult<UsagePlan> {
        UsagePlan::new(
            self.included_minutes.unwrap_or(default.included_minutes),
            self.overage_rate.unwrap_or(default.overage_rate),
        )
    }

    /// Billing period bounds, if the client sent them
    pub fn period(&self) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
        match (self.period_start, self.period_end) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(AppError::MissingField("period_end".to_string())),
            (None, Some(_)) => Err(AppError::MissingField("period_start".to_string())),
            (Some(start), Some(end)) if end < start => Err(AppError::Validation(format!(
                "period_end {} is before period_start {}",
                end, start
            ))),
            (Some(start), Some(end)) => Ok(Some((start, end))),
        }
    }
}

/// Response body for `POST /usage/summary`
#[derive(Debug, Clone, Serialize)]
pub struct UsageSummaryResponse {
    /// Computed usage figures
    #[serde(flatten)]
    pub summary: UsageSummary,

    /// Minutes left before overage starts
    pub remaining_minutes: i64,

    /// Overage cost rendered for display
    pub overage_cost_display: String,

    /// Range applied to the calls
    pub range: DateRange,

    /// Display label of the range
    pub range_label: String,

    /// Number of calls that were summarized
    pub call_count: usize,

    /// Billing period label, e.g. "Mar 1 - 31"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period: Option<String>,
}
