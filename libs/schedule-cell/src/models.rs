// libs/schedule-cell/src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_avatar: Option<String>,
    pub modality: AppointmentModality,
    pub status: AppointmentStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub reason: String,
    pub notes: Option<String>,
    pub room_number: Option<String>,
    pub is_urgent: bool,
}

impl Appointment {
    /// Check the timing invariants of a record received from the booking side.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.end_time <= self.start_time {
            return Err(ScheduleError::InvalidTimeRange {
                appointment_id: self.id.clone(),
            });
        }

        let actual = (self.end_time - self.start_time).num_minutes();
        if actual != self.duration_minutes {
            return Err(ScheduleError::DurationMismatch {
                appointment_id: self.id.clone(),
                declared: self.duration_minutes,
                actual,
            });
        }

        Ok(())
    }
}

/// Appointment fields as supplied by a booking collaborator; the duration is derived.
#[derive(Debug, Clone)]
pub struct AppointmentDraft {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub patient_avatar: Option<String>,
    pub modality: AppointmentModality,
    pub status: AppointmentStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub reason: String,
    pub notes: Option<String>,
    pub room_number: Option<String>,
    pub is_urgent: bool,
}

impl TryFrom<AppointmentDraft> for Appointment {
    type Error = ScheduleError;

    fn try_from(draft: AppointmentDraft) -> Result<Self, Self::Error> {
        let appointment = Appointment {
            duration_minutes: (draft.end_time - draft.start_time).num_minutes(),
            id: draft.id,
            patient_id: draft.patient_id,
            patient_name: draft.patient_name,
            patient_avatar: draft.patient_avatar,
            modality: draft.modality,
            status: draft.status,
            start_time: draft.start_time,
            end_time: draft.end_time,
            reason: draft.reason,
            notes: draft.notes,
            room_number: draft.room_number,
            is_urgent: draft.is_urgent,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentModality {
    InPerson,
    Video,
    Phone,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::InProgress => write!(f, "in-progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no-show"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.to_string() == s)
            .ok_or_else(|| ScheduleError::InvalidStatus(s.to_string()))
    }
}

// ==============================================================================
// QUERY MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
}

impl ViewMode {
    pub fn step_days(&self) -> i64 {
        match self {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        }
    }
}

impl FromStr for ViewMode {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            other => Err(ScheduleError::InvalidViewMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    Prev,
    Next,
}

impl FromStr for NavigationDirection {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(NavigationDirection::Prev),
            "next" => Ok(NavigationDirection::Next),
            other => Err(ScheduleError::InvalidDirection(other.to_string())),
        }
    }
}

/// Per-request view parameters; rebuilt on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleQuery {
    pub date: NaiveDate,
    pub search: String,
    pub status: StatusFilter,
    pub view_mode: ViewMode,
}

impl ScheduleQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            search: String::new(),
            status: StatusFilter::All,
            view_mode: ViewMode::Day,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}

// ==============================================================================
// DERIVED VIEW MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub label: String,
    pub hour: u32,
    pub appointment: Option<Appointment>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub urgent: usize,
}

/// Display strings for one listed appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentCard {
    pub appointment_id: String,
    pub time_range: String,
    pub patient_initials: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub date: NaiveDate,
    pub view_mode: ViewMode,
    pub heading: String,
    pub count_label: String,
    pub appointments: Vec<Appointment>,
    pub cards: Vec<AppointmentCard>,
    pub time_slots: Vec<TimeSlot>,
    pub summary: ScheduleSummary,
    pub upcoming: Vec<Appointment>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Appointment {appointment_id} must end after it starts")]
    InvalidTimeRange { appointment_id: String },

    #[error("Appointment {appointment_id} declares {declared} minutes but spans {actual}")]
    DurationMismatch {
        appointment_id: String,
        declared: i64,
        actual: i64,
    },

    #[error("Unknown appointment status: {0}")]
    InvalidStatus(String),

    #[error("Unknown view mode: {0}")]
    InvalidViewMode(String),

    #[error("Unknown navigation direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
