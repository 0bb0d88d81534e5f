// libs/telemedicine-cell/src/services/timer.rs
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::services::session::CallSession;

pub type SharedCallSession = Arc<Mutex<CallSession>>;

/// Drives [`CallSession::tick`] while a call is running.
pub trait CallTimer: Send + Sync {
    fn start(&mut self, session: SharedCallSession);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Ticks the session once per period from a spawned tokio task.
pub struct TokioIntervalTimer {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TokioIntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, handle: None }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Default for TokioIntervalTimer {
    fn default() -> Self {
        Self::every_second()
    }
}

impl CallTimer for TokioIntervalTimer {
    fn start(&mut self, session: SharedCallSession) {
        if self.is_running() {
            warn!("Call timer already running, not scheduling a second one");
            return;
        }

        let period = self.period;
        debug!("Starting call timer with period {:?}", period);

        self.handle = Some(tokio::spawn(async move {
            // First tick one full period after the call starts
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                session.lock().await.tick();
            }
        }));
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Call timer stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TokioIntervalTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
