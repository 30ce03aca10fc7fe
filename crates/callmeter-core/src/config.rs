//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use crate::error::AppError;
use crate::models::UsagePlan;
use crate::AppResult;
use chrono_tz::Tz;
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub billing: BillingConfig,
    pub cors: CorsConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Maximum JSON request body in bytes
    #[serde(default = "default_json_limit")]
    pub json_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9001
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_json_limit() -> usize {
    4 * 1024 * 1024
}

/// Billing and usage configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BillingConfig {
    /// Minutes included in the plan before overage applies
    #[serde(default = "default_included_minutes")]
    pub included_minutes: i64,

    /// Charge per overage minute
    #[serde(default = "default_overage_rate")]
    pub overage_rate: Decimal,

    /// IANA timezone that defines "local midnight" for date filtering
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_included_minutes() -> i64 {
    1000
}

fn default_overage_rate() -> Decimal {
    Decimal::new(5, 2) // 0.05 per minute
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// CORS configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    #[serde(default = "default_cors_origins")]
    pub origins: String,
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.workers", default_workers() as i64)?
            .set_default("server.json_limit_bytes", default_json_limit() as i64)?
            .set_default("billing.included_minutes", default_included_minutes())?
            .set_default("billing.overage_rate", default_overage_rate().to_string())?
            .set_default("billing.timezone", default_timezone())?
            .set_default("cors.origins", default_cors_origins())?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with CALLMETER_ prefix
            .add_source(
                Environment::with_prefix("CALLMETER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> AppResult<()> {
        self.billing.plan()?;
        self.billing.tz()?;
        Ok(())
    }
}

impl BillingConfig {
    /// Default usage plan derived from configuration
    pub fn plan(&self) -> AppResult<UsagePlan> {
        UsagePlan::new(self.included_minutes, self.overage_rate)
    }

    /// Parse the configured timezone
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Config(format!("invalid timezone '{}': {}", self.timezone, e)))
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            included_minutes: default_included_minutes(),
            overage_rate: default_overage_rate(),
            timezone: default_timezone(),
        }
    }
}
