// libs/schedule-cell/src/services/view_model.rs
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike, Utc};
use tracing::debug;

use crate::models::{
    Appointment, AppointmentCard, AppointmentStatus, NavigationDirection, ScheduleQuery, ScheduleSummary,
    ScheduleView, TimeSlot, ViewMode,
};
use crate::services::format;

/// First hour shown on the daily grid.
pub const FIRST_SLOT_HOUR: u32 = 8;
/// Number of one-hour slots on the daily grid (08:00 through 19:00).
pub const SLOT_COUNT: u32 = 12;
/// Entries shown in the next-appointments panel.
pub const UPCOMING_LIMIT: usize = 3;

/// Turns a provider's appointment list into what the schedule screen shows.
///
/// Every operation is a pure function of its inputs. Calendar days and slot
/// hours are evaluated in the clinic's fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleViewService {
    offset: FixedOffset,
}

impl ScheduleViewService {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Calendar day of `now` in clinic time.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Keep appointments matching the search text and status filter, in input order.
    pub fn filter(&self, appointments: &[Appointment], query: &ScheduleQuery) -> Vec<Appointment> {
        let needle = query.search.to_lowercase();

        appointments
            .iter()
            .filter(|appointment| {
                let matches_search = needle.is_empty()
                    || appointment.patient_name.to_lowercase().contains(&needle)
                    || appointment.reason.to_lowercase().contains(&needle);
                matches_search && query.status.matches(appointment.status)
            })
            .cloned()
            .collect()
    }

    pub fn select_for_day(&self, appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|appointment| self.local_date(appointment) == date)
            .cloned()
            .collect()
    }

    /// Bind each hourly slot to the first appointment starting in that hour.
    ///
    /// Later appointments sharing an hour are not shown on the grid; this is
    /// not a conflict check.
    pub fn bind_time_slots(&self, day_appointments: &[Appointment]) -> Vec<TimeSlot> {
        (FIRST_SLOT_HOUR..FIRST_SLOT_HOUR + SLOT_COUNT)
            .map(|hour| TimeSlot {
                label: format::slot_label(hour),
                hour,
                appointment: day_appointments
                    .iter()
                    .find(|appointment| self.local_hour(appointment) == hour)
                    .cloned(),
            })
            .collect()
    }

    pub fn summarize(&self, day_appointments: &[Appointment]) -> ScheduleSummary {
        let count_status = |status: AppointmentStatus| {
            day_appointments.iter().filter(|a| a.status == status).count()
        };

        ScheduleSummary {
            total: day_appointments.len(),
            completed: count_status(AppointmentStatus::Completed),
            in_progress: count_status(AppointmentStatus::InProgress),
            urgent: day_appointments.iter().filter(|a| a.is_urgent).count(),
        }
    }

    /// Step one day or one week. Returns `date` unchanged if the step leaves chrono's range.
    pub fn navigate(&self, date: NaiveDate, direction: NavigationDirection, view_mode: ViewMode) -> NaiveDate {
        let step = match direction {
            NavigationDirection::Next => view_mode.step_days(),
            NavigationDirection::Prev => -view_mode.step_days(),
        };

        date.checked_add_signed(Duration::days(step)).unwrap_or(date)
    }

    /// First few appointments, in input order, that have not started yet at `now`.
    pub fn upcoming(&self, day_appointments: &[Appointment], now: DateTime<Utc>) -> Vec<Appointment> {
        day_appointments
            .iter()
            .filter(|appointment| appointment.start_time > now)
            .take(UPCOMING_LIMIT)
            .cloned()
            .collect()
    }

    /// Compose the full screen model for one query.
    ///
    /// The summary counts the whole selected day; the list, grid and upcoming
    /// panel only show what passes the search and status filter.
    pub fn build(&self, appointments: &[Appointment], query: &ScheduleQuery, now: DateTime<Utc>) -> ScheduleView {
        let day_appointments = self.select_for_day(appointments, query.date);
        let visible = self.filter(&day_appointments, query);

        debug!(
            "Schedule for {}: {} on day, {} visible after filter (search={:?}, status={:?})",
            query.date,
            day_appointments.len(),
            visible.len(),
            query.search,
            query.status
        );

        ScheduleView {
            date: query.date,
            view_mode: query.view_mode,
            heading: format::day_heading(query.date),
            count_label: format::appointment_count_label(visible.len()),
            time_slots: self.bind_time_slots(&visible),
            summary: self.summarize(&day_appointments),
            upcoming: self.upcoming(&visible, now),
            cards: visible.iter().map(|appointment| self.card(appointment)).collect(),
            appointments: visible,
        }
    }

    pub fn card(&self, appointment: &Appointment) -> AppointmentCard {
        AppointmentCard {
            appointment_id: appointment.id.clone(),
            time_range: format::time_range_label(appointment, self.offset),
            patient_initials: format::initials(&appointment.patient_name),
        }
    }

    fn local_date(&self, appointment: &Appointment) -> NaiveDate {
        appointment.start_time.with_timezone(&self.offset).date_naive()
    }

    fn local_hour(&self, appointment: &Appointment) -> u32 {
        appointment.start_time.with_timezone(&self.offset).hour()
    }
}
