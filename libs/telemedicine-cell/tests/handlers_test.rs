use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use shared_utils::test_utils::{JwtTestUtils, TestConfig, TestUser};
use telemedicine_cell::router::telemedicine_routes;
use telemedicine_cell::state::TelemedicineState;

fn app() -> Router {
    telemedicine_routes(Arc::new(TelemedicineState::new(TestConfig::default().to_arc())))
}

async fn send(app: &Router, method: Method, uri: &str, bearer: Option<&str>) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(value) = bearer {
        request = request.header(header::AUTHORIZATION, value);
    }
    app.clone().oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let response = send(&app(), Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["active_calls"], 0);
}

#[tokio::test]
async fn test_anonymous_is_redirected_home() {
    let app = app();

    for (method, uri) in [
        (Method::GET, "/lobby"),
        (Method::GET, "/session"),
        (Method::POST, "/session/start"),
        (Method::POST, "/session/video"),
    ] {
        let response = send(&app, method, uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn test_patient_lobby_shows_provider() {
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::patient("pat@example.com").with_name("Jane", "Roe"), &config);

    let response = send(&app(), Method::GET, "/lobby", Some(&bearer)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let lobby = &json["lobby"];
    assert_eq!(lobby["counterpart"]["name"], "Dr. Sarah Wilson");
    assert_eq!(lobby["self_tile"]["initials"], "JR");
    assert_eq!(lobby["upcoming_consultations"].as_array().unwrap().len(), 0);
    assert_eq!(lobby["session"]["state"], "idle");
    assert_eq!(lobby["devices"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_doctor_lobby_lists_upcoming_consultations() {
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::doctor("doc@example.com"), &config);

    let json = body_json(send(&app(), Method::GET, "/lobby", Some(&bearer)).await).await;

    assert_eq!(json["lobby"]["counterpart"]["name"], "John Doe");
    assert_eq!(json["lobby"]["upcoming_consultations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_double_start_conflicts() {
    let app = app();
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::doctor("doc@example.com"), &config);

    let first = send(&app, Method::POST, "/session/start", Some(&bearer)).await;
    assert_eq!(first.status(), StatusCode::OK);
    let json = body_json(first).await;
    assert_eq!(json["session"]["state"], "in_call");
    assert_eq!(json["session"]["duration"], "00:00");

    let second = send(&app, Method::POST, "/session/start", Some(&bearer)).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let health = body_json(send(&app, Method::GET, "/health", None).await).await;
    assert_eq!(health["active_calls"], 1);
}

#[tokio::test]
async fn test_end_without_call_conflicts() {
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::patient("pat@example.com"), &config);

    let response = send(&app(), Method::POST, "/session/end", Some(&bearer)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_start_then_end_returns_idle() {
    let app = app();
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::patient("pat@example.com"), &config);

    send(&app, Method::POST, "/session/start", Some(&bearer)).await;
    let response = send(&app, Method::POST, "/session/end", Some(&bearer)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["session"]["state"], "idle");
    assert_eq!(json["session"]["elapsed_seconds"], 0);
}

#[tokio::test]
async fn test_toggles_flip_flags() {
    let app = app();
    let config = TestConfig::default();
    let bearer = JwtTestUtils::bearer(&TestUser::patient("pat@example.com"), &config);

    let video = body_json(send(&app, Method::POST, "/session/video", Some(&bearer)).await).await;
    assert_eq!(video["session"]["video_enabled"], false);

    let audio = body_json(send(&app, Method::POST, "/session/audio", Some(&bearer)).await).await;
    assert_eq!(audio["session"]["audio_enabled"], false);
    assert_eq!(audio["session"]["video_enabled"], false);

    let share = body_json(send(&app, Method::POST, "/session/screen-share", Some(&bearer)).await).await;
    assert_eq!(share["session"]["screen_sharing"], true);
    assert_eq!(share["session"]["state"], "idle");
}

#[tokio::test]
async fn test_sessions_are_per_user() {
    let app = app();
    let config = TestConfig::default();
    let doctor = JwtTestUtils::bearer(&TestUser::doctor("doc@example.com"), &config);
    let patient = JwtTestUtils::bearer(&TestUser::patient("pat@example.com"), &config);

    send(&app, Method::POST, "/session/start", Some(&doctor)).await;
    let json = body_json(send(&app, Method::GET, "/session", Some(&patient)).await).await;

    assert_eq!(json["session"]["state"], "idle");
}
