//! Integration tests for the CallMeter API handlers
//!
//! Every test pins the clock at 2024-03-15 12:00 UTC.

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use callmeter_api::{routes, AppState};
    use callmeter_core::{models::UsagePlan, FixedClock};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn state() -> AppState {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        AppState::new(
            Arc::new(FixedClock(now)),
            UsagePlan::new(100, dec!(0.10)).unwrap(),
            chrono_tz::Tz::UTC,
        )
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state()))
                    .app_data(routes::json_config(1024 * 1024))
                    .configure(routes::configure),
            )
            .await
        };
    }

    fn sample_calls() -> Value {
        json!([
            {"id": "a", "duration_seconds": 30, "start_time": "2024-03-15T09:00:00Z"},
            {"id": "b", "duration_seconds": 90, "start_time": "2024-03-14T18:30:00Z"},
            {"id": "c", "duration_seconds": 125.5, "start_time": "2024-02-01T10:00:00Z"}
        ])
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_usage_summary_all_time() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({ "calls": sample_calls() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = &body["data"];

        // 1 + 2 + 3 minutes, rounded per call
        assert_eq!(data["used_minutes"], 6);
        assert_eq!(data["included_minutes"], 100);
        assert_eq!(data["overage_minutes"], 0);
        assert_eq!(data["percentage"], 6);
        assert_eq!(data["status"], "success");
        assert_eq!(data["remaining_minutes"], 94);
        assert_eq!(data["overage_cost_display"], "$0.00");
        assert_eq!(data["range"], "all");
        assert_eq!(data["range_label"], "All Time");
        assert_eq!(data["call_count"], 3);
        assert!(data.get("billing_period").is_none());
    }

    #[actix_web::test]
    async fn test_usage_summary_with_overage_and_range() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({
                "calls": sample_calls(),
                "range": "7",
                "included_minutes": 2,
                "overage_rate": "0.25",
                "period_start": "2024-03-01",
                "period_end": "2024-03-31"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = &body["data"];

        assert_eq!(data["call_count"], 2);
        assert_eq!(data["used_minutes"], 3);
        assert_eq!(data["overage_minutes"], 1);
        assert_eq!(data["percentage"], 100);
        assert_eq!(data["status"], "danger");
        assert_eq!(data["overage_cost_display"], "$0.25");
        assert_eq!(data["range_label"], "Last 7 Days");
        assert_eq!(data["billing_period"], "Mar 1 - 31");
    }

    #[actix_web::test]
    async fn test_usage_summary_rejects_negative_duration() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({
                "calls": [{"duration_seconds": -4, "start_time": "2024-03-15T09:00:00Z"}]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_usage_summary_rejects_negative_quota() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({ "calls": [], "included_minutes": -1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_usage_summary_rejects_unknown_range() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({ "calls": [], "range": "last-week" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_body");
    }

    #[actix_web::test]
    async fn test_filter_calls_today() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/calls/filter")
            .set_json(json!({ "calls": sample_calls(), "range": "today" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = &body["data"];

        assert_eq!(data["total"], 1);
        assert_eq!(data["range_label"], "Today");
        assert_eq!(data["cutoff"], "2024-03-15T00:00:00Z");
        assert_eq!(data["calls"][0]["id"], "a");
        assert_eq!(data["calls"][0]["billable_minutes"], 1);
        assert_eq!(data["calls"][0]["duration_display"], "00:30");
    }

    #[actix_web::test]
    async fn test_filter_calls_all_keeps_order() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/calls/filter")
            .set_json(json!({ "calls": sample_calls() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let data = &body["data"];

        let ids: Vec<&str> = data["calls"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(data["total_billable_minutes"], 6);
        assert!(data["cutoff"].is_null());
        assert_eq!(data["calls"][2]["duration_display"], "02:05");
    }

    #[actix_web::test]
    async fn test_range_info() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/v1/ranges/30").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["day_count"], 30);
        assert_eq!(body["data"]["label"], "Last 30 Days");
        assert_eq!(body["data"]["cutoff"], "2024-02-14T00:00:00Z");

        let req = test::TestRequest::get().uri("/api/v1/ranges/today").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["day_count"], 1);

        let req = test::TestRequest::get().uri("/api/v1/ranges/all").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["day_count"], 0);
        assert_eq!(body["data"]["label"], "All Time");
        assert!(body["data"]["cutoff"].is_null());
    }

    #[actix_web::test]
    async fn test_range_info_rejects_garbage() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/v1/ranges/yesterday")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_range");
    }

    #[actix_web::test]
    async fn test_unknown_api_route() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/v1/invoices").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_found");
    }

    #[actix_web::test]
    async fn test_usage_summary_rejects_oversized_duration() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({
                "calls": [{"duration_seconds": 1e300, "start_time": "2024-03-15T09:00:00Z"}]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }

    #[actix_web::test]
    async fn test_filter_calls_rejects_overflowing_total() {
        let app = app!();

        // Two calls of 2^62 minutes each
        let seconds = 4611686018427387904.0_f64 * 60.0;
        let req = test::TestRequest::post()
            .uri("/api/v1/calls/filter")
            .set_json(json!({
                "calls": [
                    {"duration_seconds": seconds, "start_time": "2024-03-15T09:00:00Z"},
                    {"duration_seconds": seconds, "start_time": "2024-03-15T10:00:00Z"}
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_usage_summary_rejects_huge_overage_rate() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/usage/summary")
            .set_json(json!({
                "calls": [{"duration_seconds": 120, "start_time": "2024-03-15T09:00:00Z"}],
                "included_minutes": 0,
                "overage_rate": "79228162514264337593543950335"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
    }
}
