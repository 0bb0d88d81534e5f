use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use chrono::{Utc, TimeZone};
use tracing::debug;
use shared_models::auth::{JwtClaims, User, UserProfile, UserRole};

type HmacSha256 = Hmac<Sha256>;

/// Verifies an HS256 bearer token and maps its claims to a portal user.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<User, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let (signing_input, signature_b64) = token
        .rsplit_once('.')
        .filter(|(input, _)| input.matches('.').count() == 1)
        .ok_or_else(|| "Invalid token format".to_string())?;

    verify_signature(signing_input, signature_b64, jwt_secret)?;

    let claims_b64 = signing_input.split('.').nth(1).unwrap_or_default();
    let claims = decode_claims(claims_b64)?;

    if let Some(exp) = claims.exp {
        let now = Utc::now().timestamp() as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err("Token expired".to_string());
        }
    }

    let role = resolve_role(&claims)?;

    // Profile fields are optional in the identity provider; missing ones stay empty
    let profile = claims.user_metadata
        .clone()
        .and_then(|metadata| serde_json::from_value::<UserProfile>(metadata).ok())
        .unwrap_or_default();

    let created_at = claims.iat
        .and_then(|timestamp| Utc.timestamp_opt(timestamp as i64, 0).single());

    let user = User {
        id: claims.sub,
        email: claims.email,
        role,
        profile,
        created_at,
    };

    debug!("Token validated successfully for user: {} ({})", user.id, user.role);
    Ok(user)
}

fn verify_signature(signing_input: &str, signature_b64: &str, jwt_secret: &str) -> Result<(), String> {
    let signature = URL_SAFE_NO_PAD.decode(signature_b64).map_err(|e| {
        debug!("Failed to decode signature: {}", e);
        "Invalid signature encoding".to_string()
    })?;

    let mut mac = HmacSha256::new_from_slice(jwt_secret.as_bytes())
        .map_err(|_| "Failed to create HMAC".to_string())?;
    mac.update(signing_input.as_bytes());

    mac.verify_slice(&signature).map_err(|_| {
        debug!("Token signature verification failed");
        "Invalid token signature".to_string()
    })
}

fn decode_claims(claims_b64: &str) -> Result<JwtClaims, String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(claims_b64)
        .map_err(|_| "Invalid claims encoding".to_string())?;

    serde_json::from_slice(&bytes).map_err(|e| {
        debug!("Failed to parse claims: {}", e);
        "Invalid claims format".to_string()
    })
}

/// The portal role lives either in the top-level `role` claim or in `app_metadata.role`.
fn resolve_role(claims: &JwtClaims) -> Result<UserRole, String> {
    let app_metadata_role = claims.app_metadata
        .as_ref()
        .and_then(|metadata| metadata.get("role"))
        .and_then(|role| role.as_str());

    let raw = claims.role
        .as_deref()
        .filter(|role| role.parse::<UserRole>().is_ok())
        .or(app_metadata_role)
        .ok_or_else(|| "Token carries no portal role".to_string())?;

    raw.parse()
}
