// libs/telemedicine-cell/src/router.rs
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::session_middleware;

use crate::handlers::*;
use crate::state::TelemedicineState;

/// Creates the telemedicine routes
pub fn telemedicine_routes(state: Arc<TelemedicineState>) -> Router {
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(telemedicine_health_check));

    // Call screen routes; anonymous callers are redirected
    let session_routes = Router::new()
        .route("/lobby", get(get_lobby))
        .route("/session", get(get_call_session))
        .route("/session/start", post(start_call))
        .route("/session/end", post(end_call))
        .route("/session/video", post(toggle_video))
        .route("/session/audio", post(toggle_audio))
        .route("/session/screen-share", post(toggle_screen_share))
        .layer(middleware::from_fn_with_state(state.config.clone(), session_middleware));

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .with_state(state)
}
