//! CallMeter Backend Server
//!
//! Serves billable-minute usage, date-range filtering and range metadata to
//! the call-center analytics dashboard.

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpResponse, HttpServer};
use callmeter_api::{routes, AppState};
use callmeter_core::{AppConfig, AppResult, SystemClock};
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "callmeter={},callmeter_api={},callmeter_services={},actix_web=info",
            log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

#[actix_web::main]
async fn main() -> AppResult<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting CallMeter v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    let state = AppState::from_config(&config, Arc::new(SystemClock))
        .inspect_err(|e| error!("Invalid configuration: {}", e))?;

    info!(
        "Billing plan: {} included minutes, {} per overage minute, timezone {}",
        state.default_plan.included_minutes, state.default_plan.overage_rate, state.timezone
    );

    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    let json_limit = config.server.json_limit_bytes;
    let cors_origins = config.cors.origins.clone();

    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        // Configure CORS - clone cors_origins for each worker
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origins: Vec<&str> = cors_origins_inner.split(',').collect();
                if let Ok(origin_str) = origin.to_str() {
                    origins.iter().any(|o| o.trim() == origin_str)
                } else {
                    false
                }
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(routes::json_config(json_limit))
            // Middleware
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(actix_web::middleware::NormalizePath::trim())
            // Configure routes
            .configure(routes::configure)
            // Root redirect to health
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/v1/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
