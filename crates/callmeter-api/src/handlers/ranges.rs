//! Date range handlers
//!
//! Lets the frontend resolve a selector into the day count it sends to the
//! backend and the label it shows.

use crate::dto::{ApiResponse, RangeInfo};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use callmeter_core::{models::DateRange, AppError};
use callmeter_services::{cutoff, range_label, range_to_day_count};
use chrono::Utc;
use tracing::instrument;

/// Resolve a range selector
///
/// GET /api/v1/ranges/{range}
#[instrument(skip(state))]
pub async fn get_range(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let range: DateRange = path.into_inner().parse()?;
    let now = state.local_now();

    let info = RangeInfo {
        range,
        day_count: range_to_day_count(range),
        label: range_label(range),
        cutoff: cutoff(range, &now).map(|c| c.with_timezone(&Utc)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(info)))
}

/// Configure range routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ranges/{range}", web::get().to(get_range));
}
