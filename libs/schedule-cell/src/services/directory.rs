// libs/schedule-cell/src/services/directory.rs
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use tracing::{debug, info};

use crate::models::{
    Appointment, AppointmentDraft, AppointmentModality, AppointmentStatus, ScheduleError,
};

/// Read-only source of a provider's appointments.
///
/// Creation and status changes belong to the booking side; the schedule
/// screen only ever lists what it is given, in insertion order.
pub trait AppointmentDirectory: Send + Sync {
    fn list(&self) -> Vec<Appointment>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentDirectory {
    provider_id: String,
    appointments: Vec<Appointment>,
}

impl InMemoryAppointmentDirectory {
    pub fn new(
        provider_id: impl Into<String>,
        appointments: Vec<Appointment>,
    ) -> Result<Self, ScheduleError> {
        for appointment in &appointments {
            appointment.validate()?;
        }

        let provider_id = provider_id.into();
        info!("Loaded {} appointments for provider {}", appointments.len(), provider_id);

        Ok(Self {
            provider_id,
            appointments,
        })
    }

    pub fn empty(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            appointments: Vec::new(),
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }
}

impl AppointmentDirectory for InMemoryAppointmentDirectory {
    fn list(&self) -> Vec<Appointment> {
        debug!("Listing {} appointments for provider {}", self.appointments.len(), self.provider_id);
        self.appointments.clone()
    }
}

/// Demonstration day used by the portal when no booking backend is attached.
pub fn mock_schedule(date: NaiveDate, offset: FixedOffset) -> Result<Vec<Appointment>, ScheduleError> {
    let at = |hour: u32, minute: u32| clinic_time(date, hour, minute, offset);

    let drafts = vec![
        AppointmentDraft {
            id: "apt_1".to_string(),
            patient_id: "patient_1".to_string(),
            patient_name: "John Doe".to_string(),
            patient_avatar: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".to_string()),
            modality: AppointmentModality::InPerson,
            status: AppointmentStatus::Scheduled,
            start_time: at(9, 0)?,
            end_time: at(9, 30)?,
            reason: "Annual checkup".to_string(),
            notes: None,
            room_number: Some("Room 205".to_string()),
            is_urgent: false,
        },
        AppointmentDraft {
            id: "apt_2".to_string(),
            patient_id: "patient_2".to_string(),
            patient_name: "Emily Johnson".to_string(),
            patient_avatar: Some("https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".to_string()),
            modality: AppointmentModality::Video,
            status: AppointmentStatus::Confirmed,
            start_time: at(10, 30)?,
            end_time: at(11, 15)?,
            reason: "Follow-up consultation".to_string(),
            notes: None,
            room_number: None,
            is_urgent: false,
        },
        AppointmentDraft {
            id: "apt_3".to_string(),
            patient_id: "patient_3".to_string(),
            patient_name: "Robert Smith".to_string(),
            patient_avatar: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string()),
            modality: AppointmentModality::InPerson,
            status: AppointmentStatus::InProgress,
            start_time: at(14, 0)?,
            end_time: at(14, 30)?,
            reason: "Urgent consultation".to_string(),
            notes: None,
            room_number: Some("Room 301".to_string()),
            is_urgent: true,
        },
        AppointmentDraft {
            id: "apt_4".to_string(),
            patient_id: "patient_4".to_string(),
            patient_name: "Maria Garcia".to_string(),
            patient_avatar: None,
            modality: AppointmentModality::Phone,
            status: AppointmentStatus::Scheduled,
            start_time: at(15, 30)?,
            end_time: at(16, 0)?,
            reason: "Prescription review".to_string(),
            notes: None,
            room_number: None,
            is_urgent: false,
        },
        AppointmentDraft {
            id: "apt_5".to_string(),
            patient_id: "patient_5".to_string(),
            patient_name: "David Brown".to_string(),
            patient_avatar: None,
            modality: AppointmentModality::InPerson,
            status: AppointmentStatus::Completed,
            start_time: at(8, 0)?,
            end_time: at(8, 45)?,
            reason: "Physical therapy consultation".to_string(),
            notes: None,
            room_number: Some("Room 102".to_string()),
            is_urgent: false,
        },
    ];

    drafts.into_iter().map(Appointment::try_from).collect()
}

/// Wall-clock time on a clinic calendar day, as a UTC instant.
pub fn clinic_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, ScheduleError> {
    date.and_hms_opt(hour, minute, 0)
        .and_then(|naive| naive.and_local_timezone(offset).single())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ScheduleError::InvalidDate(format!("{} {:02}:{:02}", date, hour, minute)))
}
