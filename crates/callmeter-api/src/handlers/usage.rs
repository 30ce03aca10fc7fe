//! Usage handlers
//!
//! Billable-minute usage against the plan quota for a set of calls.

use crate::dto::{ApiResponse, UsageSummaryRequest, UsageSummaryResponse};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use callmeter_core::AppError;
use callmeter_services::{
    filter_calls_by_date, format_billing_period, format_currency, range_label, summarize_usage,
};
use tracing::{debug, info, instrument};
use validator::Validate;

/// Compute the usage summary
///
/// POST /api/v1/usage/summary
#[instrument(skip(state, body), fields(call_count = body.calls.len(), range = %body.range))]
pub async fn usage_summary(
    state: web::Data<AppState>,
    body: web::Json<UsageSummaryRequest>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let plan = body.plan(&state.default_plan)?;
    let period = body.period()?;

    let now = state.local_now();
    let calls = filter_calls_by_date(&body.calls, body.range, &now);
    debug!("Summarizing {} calls", calls.len());

    let summary = summarize_usage(&calls, &plan)?;
    if summary.is_over_quota() {
        info!(
            "Usage over quota by {} minutes ({})",
            summary.overage_minutes,
            summary.status.as_str()
        );
    }

    let response = UsageSummaryResponse {
        remaining_minutes: summary.remaining_minutes(),
        overage_cost_display: format_currency(summary.overage_cost),
        range: body.range,
        range_label: range_label(body.range),
        call_count: calls.len(),
        billing_period: period.map(|(start, end)| format_billing_period(start, end)),
        summary,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Configure usage routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/usage").route("/summary", web::post().to(usage_summary)));
}
