// libs/telemedicine-cell/src/services/controller.rs
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::models::{CallSessionError, CallSessionStatus, MediaToggle};
use crate::services::session::CallSession;
use crate::services::timer::{CallTimer, SharedCallSession};

/// Pairs call transitions with the tick timer.
///
/// The timer starts only on a successful `start_call` and stops exactly once
/// on a successful `end_call`; rejected transitions leave it untouched.
pub struct CallController<T: CallTimer> {
    session: SharedCallSession,
    timer: T,
}

impl<T: CallTimer> CallController<T> {
    pub fn new(timer: T) -> Self {
        Self {
            session: Arc::new(Mutex::new(CallSession::new())),
            timer,
        }
    }

    pub async fn start_call(&mut self) -> Result<CallSessionStatus, CallSessionError> {
        let status = {
            let mut session = self.session.lock().await;
            session.start_call()?;
            session.status()
        };

        self.timer.start(Arc::clone(&self.session));
        Ok(status)
    }

    pub async fn end_call(&mut self) -> Result<CallSessionStatus, CallSessionError> {
        let status = {
            let mut session = self.session.lock().await;
            session.end_call()?;
            session.status()
        };

        self.timer.stop();
        Ok(status)
    }

    pub async fn toggle(&self, media: MediaToggle) -> CallSessionStatus {
        let mut session = self.session.lock().await;
        let enabled = match media {
            MediaToggle::Video => session.toggle_video(),
            MediaToggle::Audio => session.toggle_audio(),
            MediaToggle::ScreenShare => session.toggle_screen_share(),
        };
        debug!("Toggled {:?} -> {}", media, enabled);
        session.status()
    }

    pub async fn status(&self) -> CallSessionStatus {
        self.session.lock().await.status()
    }

    pub fn session(&self) -> SharedCallSession {
        Arc::clone(&self.session)
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}
