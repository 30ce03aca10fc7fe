//! Call list handlers

use crate::dto::{ApiResponse, BilledCall, FilterCallsRequest, FilterCallsResponse};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use callmeter_core::{AppError, AppResult};
use callmeter_services::{
    billable_minutes, cutoff, filter_calls_by_date, format_duration, range_label,
    total_billable_minutes,
};
use chrono::Utc;
use tracing::{debug, instrument};

/// Filter calls by date range and attach billing display fields
///
/// POST /api/v1/calls/filter
#[instrument(skip(state, body), fields(call_count = body.calls.len(), range = %body.range))]
pub async fn filter_calls(
    state: web::Data<AppState>,
    body: web::Json<FilterCallsRequest>,
) -> Result<HttpResponse, AppError> {
    let FilterCallsRequest { calls, range } = body.into_inner();

    let now = state.local_now();
    let kept = filter_calls_by_date(&calls, range, &now);

    let billed = kept
        .iter()
        .map(|call| -> AppResult<BilledCall> {
            Ok(BilledCall {
                billable_minutes: billable_minutes(call.duration_seconds)?,
                duration_display: format_duration(call.duration_seconds),
                call: call.clone(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    debug!("Kept {} of {} calls", billed.len(), calls.len());

    let total_minutes = total_billable_minutes(&kept)?;

    let response = FilterCallsResponse {
        range,
        range_label: range_label(range),
        cutoff: cutoff(range, &now).map(|c| c.with_timezone(&Utc)),
        total: billed.len(),
        total_billable_minutes: total_minutes,
        calls: billed,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Configure call routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/calls").route("/filter", web::post().to(filter_calls)));
}
