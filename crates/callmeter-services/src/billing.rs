//! Billing calculator
//!
//! Converts call durations into billable minutes and derives the usage,
//! overage and display values the dashboard shows for a billing period.

use callmeter_core::{
    models::{CallRecord, UsagePlan, UsageStatus, UsageSummary},
    AppError, AppResult,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument, warn};

use crate::constants::{DANGER_THRESHOLD_PERCENT, SECONDS_PER_MINUTE, WARNING_THRESHOLD_PERCENT};

/// Billable minutes for a single call
///
/// Any started minute is charged in full: `ceil(duration / 60)`.
/// Negative or non-finite durations, and durations whose minute count does
/// not fit in an `i64`, are rejected.
pub fn billable_minutes(duration_seconds: f64) -> AppResult<i64> {
    if !duration_seconds.is_finite() || duration_seconds < 0.0 {
        return Err(AppError::Validation(format!(
            "call duration must be a finite, non-negative number of seconds, got {}",
            duration_seconds
        )));
    }

    let minutes = (duration_seconds / SECONDS_PER_MINUTE).ceil();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if minutes >= i64::MAX as f64 {
        return Err(AppError::Validation(format!(
            "call duration of {} seconds is too large to bill",
            duration_seconds
        )));
    }

    Ok(minutes as i64)
}

/// Sum of per-call billable minutes
///
/// Rounding happens per call, so the total is never below the rounded-up
/// combined duration. A total that overflows `i64` is rejected.
pub fn total_billable_minutes(calls: &[CallRecord]) -> AppResult<i64> {
    calls.iter().try_fold(0i64, |total, call| {
        let minutes = billable_minutes(call.duration_seconds).inspect_err(|_| {
            warn!(
                call_id = %call.id,
                duration = call.duration_seconds,
                "Rejecting call with invalid duration"
            );
        })?;

        total.checked_add(minutes).ok_or_else(|| {
            AppError::Validation(format!(
                "total billable minutes overflow after call {}",
                call.id
            ))
        })
    })
}

/// Whole percent of the included quota that has been used
///
/// Clamped to `0..=100`. A zero quota reports 0 instead of dividing by zero.
pub fn usage_percentage(used_minutes: i64, included_minutes: i64) -> u8 {
    if included_minutes == 0 {
        return 0;
    }

    let percent = (used_minutes as f64 / included_minutes as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Status band for a usage percentage
pub fn usage_status(percentage: u8) -> UsageStatus {
    if percentage < WARNING_THRESHOLD_PERCENT {
        UsageStatus::Success
    } else if percentage < DANGER_THRESHOLD_PERCENT {
        UsageStatus::Warning
    } else {
        UsageStatus::Danger
    }
}

/// Minutes used beyond the included quota
#[inline]
pub fn overage_minutes(used_minutes: i64, included_minutes: i64) -> i64 {
    used_minutes.saturating_sub(included_minutes).max(0)
}

/// Charge for overage minutes
///
/// Exact; currency rounding is left to [`format_currency`]. Fails when the
/// product does not fit in a `Decimal`.
pub fn overage_cost(overage_minutes: i64, rate: Decimal) -> AppResult<Decimal> {
    Decimal::from(overage_minutes)
        .checked_mul(rate)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "overage cost of {} minutes at {} per minute is out of range",
                overage_minutes, rate
            ))
        })
}

/// Short label for a billing period
///
/// `"Mar 1 - 31"` when both dates fall in the same month,
/// `"Mar 15 - Apr 14"` otherwise.
pub fn format_billing_period(start: NaiveDate, end: NaiveDate) -> String {
    let same_month = start.year() == end.year() && start.month() == end.month();

    if same_month {
        format!("{} - {}", start.format("%b %-d"), end.day())
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
    }
}

/// Render an amount for display, e.g. `$12.50`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Render a call length as `MM:SS`
///
/// Fractional seconds are truncated. Minutes are not wrapped into hours.
pub fn format_duration(duration_seconds: f64) -> String {
    let total = duration_seconds.max(0.0) as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Compute the full usage summary for a set of calls under a plan
#[instrument(skip(calls), fields(call_count = calls.len()))]
pub fn summarize_usage(calls: &[CallRecord], plan: &UsagePlan) -> AppResult<UsageSummary> {
    let used_minutes = total_billable_minutes(calls)?;
    let percentage = usage_percentage(used_minutes, plan.included_minutes);
    let overage = overage_minutes(used_minutes, plan.included_minutes);

    let summary = UsageSummary {
        used_minutes,
        included_minutes: plan.included_minutes,
        overage_minutes: overage,
        overage_cost: overage_cost(overage, plan.overage_rate)?,
        percentage,
        status: usage_status(percentage),
    };

    debug!(
        "Usage: {}/{} minutes ({}%), overage {} min = {}",
        summary.used_minutes,
        summary.included_minutes,
        summary.percentage,
        summary.overage_minutes,
        summary.overage_cost
    );

    Ok(summary)
}
