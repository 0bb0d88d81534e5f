// libs/schedule-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_utils::extractor::session_middleware;

use crate::handlers;
use crate::state::ScheduleState;

/// Schedule screen routes. Providers only; other callers are redirected.
pub fn schedule_routes(state: Arc<ScheduleState>) -> Router {
    Router::new()
        .route("/", get(handlers::get_schedule))
        .route("/navigate", get(handlers::navigate_schedule))
        .layer(middleware::from_fn_with_state(state.config.clone(), session_middleware))
        .with_state(state)
}
