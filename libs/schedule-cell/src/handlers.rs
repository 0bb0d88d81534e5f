// libs/schedule-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use shared_models::error::AppError;
use shared_utils::access::{check_access, AccessDecision, PROVIDERS_ONLY};
use shared_utils::extractor::CurrentSession;

use crate::models::{NavigationDirection, ScheduleError, ScheduleQuery, StatusFilter, ViewMode};
use crate::state::ScheduleState;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQueryParams {
    pub date: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub view: Option<String>,
}

impl ScheduleQueryParams {
    /// Build a query, falling back to `today` and the unfiltered day view.
    pub fn into_query(self, today: NaiveDate) -> Result<ScheduleQuery, ScheduleError> {
        let date = match self.date.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => today,
        };
        let status = match self.status.as_deref() {
            Some(raw) => raw.parse()?,
            None => StatusFilter::All,
        };
        let view_mode = match self.view.as_deref() {
            Some(raw) => raw.parse()?,
            None => ViewMode::Day,
        };

        Ok(ScheduleQuery {
            date,
            search: self.search.unwrap_or_default(),
            status,
            view_mode,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NavigateParams {
    pub date: Option<String>,
    pub direction: String,
    pub view: Option<String>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(raw.to_string()))
}

fn to_app_error(error: ScheduleError) -> AppError {
    AppError::ValidationError(error.to_string())
}

// ==============================================================================
// SCHEDULE HANDLERS
// ==============================================================================

/// Day schedule for the signed-in provider
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ScheduleState>>,
    Extension(session): Extension<CurrentSession>,
    Query(params): Query<ScheduleQueryParams>,
) -> Result<Response, AppError> {
    let user = match check_access(&session, PROVIDERS_ONLY) {
        AccessDecision::Granted(user) => user,
        AccessDecision::Redirect(to) => return Ok(Redirect::to(to).into_response()),
    };

    let now = Utc::now();
    let query = params
        .into_query(state.view.today(now))
        .map_err(to_app_error)?;

    debug!("User {} requested schedule for {}", user.id, query.date);

    let appointments = state.directory.list();
    let view = state.view.build(&appointments, &query, now);

    Ok(Json(json!({
        "success": true,
        "provider_id": state.provider_id,
        "query": query,
        "schedule": view
    })).into_response())
}

/// Previous/next day or week relative to the given date
#[axum::debug_handler]
pub async fn navigate_schedule(
    State(state): State<Arc<ScheduleState>>,
    Extension(session): Extension<CurrentSession>,
    Query(params): Query<NavigateParams>,
) -> Result<Response, AppError> {
    if let AccessDecision::Redirect(to) = check_access(&session, PROVIDERS_ONLY) {
        return Ok(Redirect::to(to).into_response());
    }

    let date = match params.date.as_deref() {
        Some(raw) => parse_date(raw).map_err(to_app_error)?,
        None => state.view.today(Utc::now()),
    };
    let direction: NavigationDirection = params.direction.parse().map_err(to_app_error)?;
    let view_mode: ViewMode = match params.view.as_deref() {
        Some(raw) => raw.parse().map_err(to_app_error)?,
        None => ViewMode::Day,
    };

    let new_date = state.view.navigate(date, direction, view_mode);

    Ok(Json(json!({
        "success": true,
        "date": new_date,
        "view_mode": view_mode
    })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn empty_params_default_to_today_unfiltered() {
        let query = ScheduleQueryParams::default().into_query(today()).unwrap();
        assert_eq!(query, ScheduleQuery::for_date(today()));
    }

    #[test]
    fn params_are_parsed() {
        let params = ScheduleQueryParams {
            date: Some("2024-02-29".to_string()),
            search: Some("Doe".to_string()),
            status: Some("no-show".to_string()),
            view: Some("week".to_string()),
        };
        let query = params.into_query(today()).unwrap();
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(query.search, "Doe");
        assert_eq!(query.status, StatusFilter::Only(crate::models::AppointmentStatus::NoShow));
        assert_eq!(query.view_mode, ViewMode::Week);
    }

    #[test]
    fn bad_params_are_rejected() {
        let bad_date = ScheduleQueryParams { date: Some("2024-13-01".to_string()), ..Default::default() };
        assert_matches!(bad_date.into_query(today()), Err(ScheduleError::InvalidDate(_)));

        let bad_view = ScheduleQueryParams { view: Some("month".to_string()), ..Default::default() };
        assert_matches!(bad_view.into_query(today()), Err(ScheduleError::InvalidViewMode(_)));
    }
}
