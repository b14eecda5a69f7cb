use std::env;
use tracing::warn;

pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub booking_horizon_days: u32,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("API_BASE_URL not set, using empty value");
                    String::new()
                }),
            booking_horizon_days: env::var("BOOKING_HORIZON_DAYS")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(days) => Some(days),
                    Err(_) => {
                        warn!("BOOKING_HORIZON_DAYS is not a number, using default");
                        None
                    }
                })
                .unwrap_or(DEFAULT_BOOKING_HORIZON_DAYS),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| match raw.parse() {
                    Ok(secs) => Some(secs),
                    Err(_) => {
                        warn!("REQUEST_TIMEOUT_SECS is not a number, using default");
                        None
                    }
                })
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    /// Config pointing at an explicit base URL, used by tests against a mock server.
    pub fn for_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.to_string(),
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}
