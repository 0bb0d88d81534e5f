// libs/telemedicine-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_utils::access::{check_access, AccessDecision, AccessPolicy};
use shared_utils::extractor::CurrentSession;

use crate::models::{CallSessionError, CallSessionStatus, MediaToggle};
use crate::state::TelemedicineState;

fn call_error(error: CallSessionError) -> AppError {
    AppError::Conflict(error.to_string())
}

fn session_response(status: CallSessionStatus) -> Response {
    Json(json!({
        "success": true,
        "session": status
    })).into_response()
}

macro_rules! require_session {
    ($session:expr) => {
        match check_access(&$session, AccessPolicy::Authenticated) {
            AccessDecision::Granted(user) => user,
            AccessDecision::Redirect(to) => return Ok(Redirect::to(to).into_response()),
        }
    };
}

// ==============================================================================
// PUBLIC HANDLERS
// ==============================================================================

pub async fn telemedicine_health_check(
    State(state): State<Arc<TelemedicineState>>,
) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "active_calls": state.calls.active_calls().await,
        "auth_configured": state.config.is_configured()
    }))
}

// ==============================================================================
// CALL SCREEN HANDLERS
// ==============================================================================

/// Lobby for the signed-in user with their current call state
#[axum::debug_handler]
pub async fn get_lobby(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    let user = require_session!(session);

    let status = state.calls.status(&user.id).await;
    let lobby = state.lobby.lobby_for(&user, status);

    Ok(Json(json!({
        "success": true,
        "lobby": lobby
    })).into_response())
}

#[axum::debug_handler]
pub async fn get_call_session(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    let user = require_session!(session);
    Ok(session_response(state.calls.status(&user.id).await))
}

#[axum::debug_handler]
pub async fn start_call(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    let user = require_session!(session);

    let status = state.calls.start_call(&user.id).await.map_err(call_error)?;
    Ok(session_response(status))
}

#[axum::debug_handler]
pub async fn end_call(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    let user = require_session!(session);

    let status = state.calls.end_call(&user.id).await.map_err(call_error)?;
    Ok(session_response(status))
}

async fn toggle_media(
    state: Arc<TelemedicineState>,
    session: CurrentSession,
    media: MediaToggle,
) -> Result<Response, AppError> {
    let user = require_session!(session);
    Ok(session_response(state.calls.toggle(&user.id, media).await))
}

pub async fn toggle_video(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    toggle_media(state, session, MediaToggle::Video).await
}

pub async fn toggle_audio(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    toggle_media(state, session, MediaToggle::Audio).await
}

pub async fn toggle_screen_share(
    State(state): State<Arc<TelemedicineState>>,
    Extension(session): Extension<CurrentSession>,
) -> Result<Response, AppError> {
    toggle_media(state, session, MediaToggle::ScreenShare).await
}
