// libs/schedule-cell/src/lib.rs
//! # Schedule Cell
//!
//! Read-only appointment schedule for doctors and admins: an appointment
//! directory plus the view model that lays a day of appointments onto a
//! fixed grid of hourly slots (08:00 to 19:00), with search, status filter
//! and daily counters.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                  Schedule Cell                      |
//! +-----------------------------------------------------+
//! |  handlers.rs     |  HTTP endpoint handlers          |
//! |  router.rs       |  Route definitions               |
//! |  models.rs       |  Appointment, query, view types  |
//! |  state.rs        |  Shared router state             |
//! |  services/       |                                  |
//! |    directory.rs  |  Appointment source              |
//! |    view_model.rs |  Filter, day, slots, summary     |
//! |    format.rs     |  Display labels                  |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /appointments/schedule?date=&search=&status=&view=` - Schedule view
//! - `GET /appointments/schedule/navigate?date=&direction=&view=` - Step the date
//!
//! Anonymous callers are redirected to `/`, patients to `/dashboard`.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::{
    Appointment, AppointmentCard, AppointmentDraft, AppointmentModality, AppointmentStatus, NavigationDirection,
    ScheduleError, ScheduleQuery, ScheduleSummary, ScheduleView, StatusFilter, TimeSlot, ViewMode,
};

pub use services::{mock_schedule, AppointmentDirectory, InMemoryAppointmentDirectory, ScheduleViewService};
pub use state::ScheduleState;

pub use router::schedule_routes;
