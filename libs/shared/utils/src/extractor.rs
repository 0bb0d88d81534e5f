use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
    body::Body,
};
use tracing::debug;

use shared_models::auth::User;
use shared_config::AppConfig;

use crate::jwt::validate_token;

/// Session resolved for the current request; `None` when the caller is anonymous.
#[derive(Debug, Clone, Default)]
pub struct CurrentSession(pub Option<User>);

impl CurrentSession {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

// Screens decide on redirects themselves, so a missing or bad token never fails the request here
pub async fn session_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let session = resolve_session(&request, &config);
    request.extensions_mut().insert(session);
    next.run(request).await
}

pub fn resolve_session<B>(request: &Request<B>, config: &AppConfig) -> CurrentSession {
    let Some(auth_value) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    else {
        return CurrentSession(None);
    };

    let Some(token) = auth_value.strip_prefix("Bearer ") else {
        debug!("Authorization header is not a bearer token");
        return CurrentSession(None);
    };

    match validate_token(token, &config.auth_jwt_secret) {
        Ok(user) => CurrentSession(Some(user)),
        Err(e) => {
            debug!("Ignoring invalid session token: {}", e);
            CurrentSession(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{JwtTestUtils, TestConfig, TestUser};

    fn request_with(header: Option<String>) -> Request<()> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn anonymous_without_header() {
        let config = TestConfig::default().to_app_config();
        assert!(resolve_session(&request_with(None), &config).user().is_none());
    }

    #[test]
    fn anonymous_with_non_bearer_header() {
        let config = TestConfig::default().to_app_config();
        let request = request_with(Some("Basic abc".to_string()));
        assert!(resolve_session(&request, &config).user().is_none());
    }

    #[test]
    fn resolves_valid_bearer_token() {
        let test_config = TestConfig::default();
        let user = TestUser::admin("admin@example.com");
        let token = JwtTestUtils::create_test_token(&user, &test_config.jwt_secret, Some(1));

        let request = request_with(Some(format!("Bearer {}", token)));
        let session = resolve_session(&request, &test_config.to_app_config());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some(user.id.as_str()));
    }
}
