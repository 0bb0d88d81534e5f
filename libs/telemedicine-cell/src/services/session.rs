// libs/telemedicine-cell/src/services/session.rs
use tracing::{debug, info, warn};

use crate::models::{CallSessionError, CallSessionStatus, CallState};

/// Local state of the call screen.
///
/// Media flags survive across calls so the pre-call preview settings carry
/// into the call. The session never schedules its own ticks; whoever owns
/// it must call [`CallSession::tick`] once per second while in a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSession {
    state: CallState,
    video_enabled: bool,
    audio_enabled: bool,
    screen_sharing: bool,
    elapsed_seconds: u64,
}

impl Default for CallSession {
    fn default() -> Self {
        Self {
            state: CallState::Idle,
            video_enabled: true,
            audio_enabled: true,
            screen_sharing: false,
            elapsed_seconds: 0,
        }
    }
}

impl CallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn is_in_call(&self) -> bool {
        self.state == CallState::InCall
    }

    pub fn video_enabled(&self) -> bool {
        self.video_enabled
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn screen_sharing(&self) -> bool {
        self.screen_sharing
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Idle -> InCall. Starting again while in a call is rejected and leaves the counter alone.
    pub fn start_call(&mut self) -> Result<(), CallSessionError> {
        if self.is_in_call() {
            warn!("Start requested while already in a call at {}", format_duration(self.elapsed_seconds));
            return Err(CallSessionError::AlreadyInCall);
        }

        self.state = CallState::InCall;
        self.elapsed_seconds = 0;
        info!("Call started (video={}, audio={})", self.video_enabled, self.audio_enabled);
        Ok(())
    }

    /// InCall -> Idle. Screen sharing always stops with the call.
    pub fn end_call(&mut self) -> Result<(), CallSessionError> {
        if !self.is_in_call() {
            warn!("End requested with no call in progress");
            return Err(CallSessionError::NotInCall);
        }

        info!("Call ended after {}", format_duration(self.elapsed_seconds));
        self.state = CallState::Idle;
        self.elapsed_seconds = 0;
        self.screen_sharing = false;
        Ok(())
    }

    pub fn toggle_video(&mut self) -> bool {
        self.video_enabled = !self.video_enabled;
        debug!("Video {}", if self.video_enabled { "on" } else { "off" });
        self.video_enabled
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        debug!("Audio {}", if self.audio_enabled { "on" } else { "off" });
        self.audio_enabled
    }

    pub fn toggle_screen_share(&mut self) -> bool {
        self.screen_sharing = !self.screen_sharing;
        debug!("Screen sharing {}", if self.screen_sharing { "on" } else { "off" });
        self.screen_sharing
    }

    pub fn tick(&mut self) {
        if self.is_in_call() {
            self.elapsed_seconds += 1;
        }
    }

    pub fn status(&self) -> CallSessionStatus {
        CallSessionStatus {
            state: self.state,
            video_enabled: self.video_enabled,
            audio_enabled: self.audio_enabled,
            screen_sharing: self.screen_sharing,
            elapsed_seconds: self.elapsed_seconds,
            duration: format_duration(self.elapsed_seconds),
        }
    }
}

/// `MM:SS`, zero padded; minutes keep counting past 59.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
