use std::env;

use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth_jwt_secret: String,
    pub clinic_utc_offset_minutes: i32,
    pub seed_mock_schedule: bool,
    pub schedule_provider_id: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            auth_jwt_secret: env::var("AUTH_JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("AUTH_JWT_SECRET not set, using empty value");
                    String::new()
                }),
            clinic_utc_offset_minutes: env::var("CLINIC_UTC_OFFSET_MINUTES")
                .ok()
                .and_then(|raw| match raw.parse::<i32>() {
                    Ok(minutes) if offset_from_minutes(minutes).is_some() => Some(minutes),
                    _ => {
                        warn!("CLINIC_UTC_OFFSET_MINUTES={} is not a valid offset, using UTC", raw);
                        None
                    }
                })
                .unwrap_or(0),
            seed_mock_schedule: env::var("SEED_MOCK_SCHEDULE")
                .map(|raw| !matches!(raw.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
            schedule_provider_id: env::var("SCHEDULE_PROVIDER_ID")
                .unwrap_or_else(|_| "provider_1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.auth_jwt_secret.is_empty()
    }

    /// Fixed offset used for calendar-day matching and slot hours.
    /// Falls back to UTC when the stored minutes are out of range.
    pub fn clinic_offset(&self) -> FixedOffset {
        offset_from_minutes(self.clinic_utc_offset_minutes).unwrap_or_else(|| Utc.fix())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_jwt_secret: String::new(),
            clinic_utc_offset_minutes: 0,
            seed_mock_schedule: true,
            schedule_provider_id: "provider_1".to_string(),
            port: 3000,
        }
    }
}

fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    minutes.checked_mul(60).and_then(FixedOffset::east_opt)
}
