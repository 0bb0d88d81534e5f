// libs/telemedicine-cell/src/models.rs
use serde::{Deserialize, Serialize};

// ==============================================================================
// CALL SESSION MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallState {
    #[default]
    Idle,
    InCall,
}

/// Snapshot of a call session as shown on the call screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallSessionStatus {
    pub state: CallState,
    pub video_enabled: bool,
    pub audio_enabled: bool,
    pub screen_sharing: bool,
    pub elapsed_seconds: u64,
    pub duration: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MediaToggle {
    Video,
    Audio,
    ScreenShare,
}

// ==============================================================================
// LOBBY MODELS
// ==============================================================================

/// The other side of the call as shown in the main video tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounterpartTile {
    pub name: String,
    pub role_label: String,
    pub initials: String,
}

/// The local picture-in-picture tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfTile {
    pub name: String,
    pub initials: String,
    pub avatar: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpcomingConsultation {
    pub id: String,
    pub patient_name: String,
    pub initials: String,
    pub time: String,
    pub consultation_type: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceStatus {
    pub device: String,
    pub ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemedicineLobby {
    pub title: String,
    pub call_prompt: String,
    pub counterpart: CounterpartTile,
    pub self_tile: SelfTile,
    pub upcoming_consultations: Vec<UpcomingConsultation>,
    pub devices: Vec<DeviceStatus>,
    pub session: CallSessionStatus,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum CallSessionError {
    #[error("A call is already in progress")]
    AlreadyInCall,

    #[error("No call is in progress")]
    NotInCall,
}
