// libs/telemedicine-cell/src/state.rs
use std::sync::Arc;

use shared_config::AppConfig;

use crate::services::{CallSessionRegistry, TelemedicineLobbyService, TokioIntervalTimer};

/// Shared state behind the telemedicine routes.
pub struct TelemedicineState {
    pub config: Arc<AppConfig>,
    pub calls: CallSessionRegistry<TokioIntervalTimer>,
    pub lobby: TelemedicineLobbyService,
}

impl TelemedicineState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            calls: CallSessionRegistry::new(TokioIntervalTimer::every_second),
            lobby: TelemedicineLobbyService::new(),
        }
    }
}
