use tracing::info;

use shared_models::auth::User;

use crate::extractor::CurrentSession;

/// Where anonymous visitors are sent.
pub const SIGN_IN_PATH: &str = "/";
/// Where authenticated users without the required role are sent.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy)]
pub enum AccessPolicy {
    Authenticated,
    Providers,
}

pub const PROVIDERS_ONLY: AccessPolicy = AccessPolicy::Providers;

#[derive(Debug, Clone)]
pub enum AccessDecision {
    Granted(User),
    Redirect(&'static str),
}

pub fn check_access(session: &CurrentSession, policy: AccessPolicy) -> AccessDecision {
    let Some(user) = session.user() else {
        info!("Anonymous access redirected to {}", SIGN_IN_PATH);
        return AccessDecision::Redirect(SIGN_IN_PATH);
    };

    match policy {
        AccessPolicy::Authenticated => AccessDecision::Granted(user.clone()),
        AccessPolicy::Providers if user.role.is_provider() => AccessDecision::Granted(user.clone()),
        AccessPolicy::Providers => {
            info!("User {} with role {} redirected to {}", user.id, user.role, DASHBOARD_PATH);
            AccessDecision::Redirect(DASHBOARD_PATH)
        }
    }
}
