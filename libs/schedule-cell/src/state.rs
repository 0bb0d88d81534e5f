// libs/schedule-cell/src/state.rs
use std::sync::Arc;

use shared_config::AppConfig;

use crate::services::{AppointmentDirectory, ScheduleViewService};

/// Shared state behind the schedule routes.
pub struct ScheduleState {
    pub config: Arc<AppConfig>,
    pub provider_id: String,
    pub directory: Arc<dyn AppointmentDirectory>,
    pub view: ScheduleViewService,
}

impl ScheduleState {
    pub fn new(config: Arc<AppConfig>, directory: Arc<dyn AppointmentDirectory>) -> Self {
        Self {
            provider_id: config.schedule_provider_id.clone(),
            view: ScheduleViewService::new(config.clinic_offset()),
            config,
            directory,
        }
    }
}
