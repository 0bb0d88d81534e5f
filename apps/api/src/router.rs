use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use schedule_cell::router::schedule_routes;
use schedule_cell::ScheduleState;
use telemedicine_cell::router::telemedicine_routes;
use telemedicine_cell::TelemedicineState;

pub fn create_router(
    schedule_state: Arc<ScheduleState>,
    telemedicine_state: Arc<TelemedicineState>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic portal API is running!" }))
        .nest("/appointments/schedule", schedule_routes(schedule_state))
        .nest("/telemedicine", telemedicine_routes(telemedicine_state))
}
