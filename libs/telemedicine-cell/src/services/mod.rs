// libs/telemedicine-cell/src/services/mod.rs

pub mod controller;
pub mod lobby;
pub mod registry;
pub mod session;
pub mod timer;

pub use controller::CallController;
pub use lobby::TelemedicineLobbyService;
pub use registry::CallSessionRegistry;
pub use session::{format_duration, CallSession};
pub use timer::{CallTimer, SharedCallSession, TokioIntervalTimer};
