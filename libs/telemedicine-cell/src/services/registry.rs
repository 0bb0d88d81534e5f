// libs/telemedicine-cell/src/services/registry.rs
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::models::{CallSessionError, CallSessionStatus, CallState, MediaToggle};
use crate::services::controller::CallController;
use crate::services::session::CallSession;
use crate::services::timer::CallTimer;

type TimerFactory<T> = Box<dyn Fn() -> T + Send + Sync>;
type SharedController<T> = Arc<Mutex<CallController<T>>>;

/// One call controller per signed-in user; nothing is shared between users.
///
/// The map lock is only held to look up or insert an entry, so one user's
/// call actions never wait on another's. An entry is dropped again once its
/// session is idle with default media settings.
pub struct CallSessionRegistry<T: CallTimer> {
    controllers: RwLock<HashMap<String, SharedController<T>>>,
    timer_factory: TimerFactory<T>,
}

impl<T: CallTimer> CallSessionRegistry<T> {
    pub fn new(timer_factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            controllers: RwLock::new(HashMap::new()),
            timer_factory: Box::new(timer_factory),
        }
    }

    pub async fn status(&self, user_id: &str) -> CallSessionStatus {
        match self.existing(user_id).await {
            Some(controller) => controller.lock().await.status().await,
            None => CallSession::new().status(),
        }
    }

    pub async fn start_call(&self, user_id: &str) -> Result<CallSessionStatus, CallSessionError> {
        let controller = self.get_or_create(user_id).await;
        let result = controller.lock().await.start_call().await;
        drop(controller);

        if result.is_err() {
            self.evict_if_default(user_id).await;
        }
        result
    }

    pub async fn end_call(&self, user_id: &str) -> Result<CallSessionStatus, CallSessionError> {
        let controller = self.existing(user_id).await.ok_or(CallSessionError::NotInCall)?;
        let result = controller.lock().await.end_call().await;
        drop(controller);

        self.evict_if_default(user_id).await;
        result
    }

    pub async fn toggle(&self, user_id: &str, media: MediaToggle) -> CallSessionStatus {
        let controller = self.get_or_create(user_id).await;
        let status = controller.lock().await.toggle(media).await;
        drop(controller);

        self.evict_if_default(user_id).await;
        status
    }

    pub async fn active_calls(&self) -> usize {
        let controllers: Vec<_> = self.controllers.read().await.values().cloned().collect();

        let mut active = 0;
        for controller in controllers {
            if controller.lock().await.status().await.state == CallState::InCall {
                active += 1;
            }
        }
        active
    }

    /// Number of users currently holding a session entry.
    pub async fn tracked_sessions(&self) -> usize {
        self.controllers.read().await.len()
    }

    async fn existing(&self, user_id: &str) -> Option<SharedController<T>> {
        self.controllers.read().await.get(user_id).cloned()
    }

    async fn get_or_create(&self, user_id: &str) -> SharedController<T> {
        if let Some(controller) = self.existing(user_id).await {
            return controller;
        }

        let mut controllers = self.controllers.write().await;
        controllers
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!("Creating call session for user {}", user_id);
                Arc::new(Mutex::new(CallController::new((self.timer_factory)())))
            })
            .clone()
    }

    // Only entries nobody else holds are checked, so a concurrent request
    // never ends up acting on a controller that is no longer in the map.
    async fn evict_if_default(&self, user_id: &str) {
        let mut controllers = self.controllers.write().await;
        let Some(controller) = controllers.get(user_id) else {
            return;
        };
        if Arc::strong_count(controller) > 1 {
            return;
        }

        let status = controller.lock().await.status().await;
        if status == CallSession::new().status() {
            debug!("Dropping idle call session for user {}", user_id);
            controllers.remove(user_id);
        }
    }
}
