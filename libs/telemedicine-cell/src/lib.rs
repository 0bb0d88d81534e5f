// libs/telemedicine-cell/src/lib.rs
//! # Telemedicine Cell
//!
//! Locally simulated video call for the telemedicine screen. Each signed-in
//! user owns one call session: idle or in a call, with camera, microphone
//! and screen-share toggles and an elapsed-time counter. No media is
//! transported; the counter is advanced by an injected timer.
//!
//! ```text
//! +-----------------------------------------------------+
//! |                Telemedicine Cell                    |
//! +-----------------------------------------------------+
//! |  handlers.rs      |  HTTP endpoint handlers         |
//! |  router.rs        |  Route definitions              |
//! |  models.rs        |  Call status, lobby, errors     |
//! |  services/        |                                 |
//! |    session.rs     |  Call state machine             |
//! |    timer.rs       |  Tick timer capability          |
//! |    controller.rs  |  Transitions paired with timer  |
//! |    registry.rs    |  Per-user controllers           |
//! |    lobby.rs       |  Lobby screen content           |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /telemedicine/health` - Health check
//! - `GET /telemedicine/lobby` - Lobby and current call state
//! - `GET /telemedicine/session` - Current call state
//! - `POST /telemedicine/session/start` - Start the call (409 if already in one)
//! - `POST /telemedicine/session/end` - End the call (409 if none)
//! - `POST /telemedicine/session/{video,audio,screen-share}` - Toggle media
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use telemedicine_cell::services::{CallController, TokioIntervalTimer};
//!
//! # async fn example() -> Result<(), telemedicine_cell::CallSessionError> {
//! let mut call = CallController::new(TokioIntervalTimer::every_second());
//! call.start_call().await?;
//! // ... one tick per second while the call runs ...
//! let status = call.end_call().await?;
//! assert_eq!(status.duration, "00:00");
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;

pub use models::{
    CallSessionError, CallSessionStatus, CallState, MediaToggle, TelemedicineLobby,
};

pub use services::{
    format_duration, CallController, CallSession, CallSessionRegistry, CallTimer,
    TelemedicineLobbyService, TokioIntervalTimer,
};
pub use state::TelemedicineState;

pub use router::telemedicine_routes;
