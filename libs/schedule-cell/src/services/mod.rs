// libs/schedule-cell/src/services/mod.rs

pub mod directory;
pub mod format;
pub mod view_model;

pub use directory::{mock_schedule, AppointmentDirectory, InMemoryAppointmentDirectory};
pub use view_model::ScheduleViewService;
