//! Shared application state

use callmeter_core::{models::UsagePlan, AppConfig, AppResult, Clock};
use chrono::DateTime;
use chrono_tz::Tz;
use std::sync::Arc;

/// State handed to every handler through `web::Data`
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for date filtering
    pub clock: Arc<dyn Clock>,
    /// Plan used when a request does not override it
    pub default_plan: UsagePlan,
    /// Timezone defining local midnight
    pub timezone: Tz,
}

impl AppState {
    /// Create state from explicit parts
    pub fn new(clock: Arc<dyn Clock>, default_plan: UsagePlan, timezone: Tz) -> Self {
        Self {
            clock,
            default_plan,
            timezone,
        }
    }

    /// Build state from loaded configuration
    pub fn from_config(config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self::new(
            clock,
            config.billing.plan()?,
            config.billing.tz()?,
        ))
    }

    /// Current time in the dashboard timezone
    pub fn local_now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.timezone)
    }
}
