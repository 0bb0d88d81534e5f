// libs/schedule-cell/src/services/format.rs
use chrono::{FixedOffset, NaiveDate};

use crate::models::Appointment;

pub fn slot_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// e.g. "Monday, January 1, 2024"
pub fn day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn appointment_count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} appointment{} scheduled", count, plural)
}

/// e.g. "09:00 AM - 09:30 AM" in clinic time
pub fn time_range_label(appointment: &Appointment, offset: FixedOffset) -> String {
    let start = appointment.start_time.with_timezone(&offset);
    let end = appointment.end_time.with_timezone(&offset);
    format!("{} - {}", start.format("%I:%M %p"), end.format("%I:%M %p"))
}

/// Avatar fallback: first character of each word in the name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}
