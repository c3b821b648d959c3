use crate::core::{AppError, AppState};
use crate::entities::{User, UserRole};
use axum::extract::State;
use axum::{body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Finestra di validità del token emesso al login
const TOKEN_VALIDITY_HOURS: i64 = 2;

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    /// Email dell'utente, la chiave di business
    pub sub: String,
    pub role: UserRole,
}

#[instrument(skip(secret), fields(email = %email))]
pub fn encode_jwt(email: String, role: UserRole, secret: &str) -> Result<String, AppError> {
    debug!("Encoding JWT token for user");
    let now = Utc::now();
    let exp = (now + Duration::hours(TOKEN_VALIDITY_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;
    let claims = Claims {
        exp,
        iat,
        sub: email,
        role,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        AppError::internal_server_error("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, AppError> {
    debug!("Decoding JWT token");
    decode(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        AppError::unauthorized("Unable to decode token")
    })
}

/// Middleware di autenticazione: estrae il bearer token, lo valida e
/// inserisce l'utente corrente nelle Extension della richiesta.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing or malformed authorization header");
            AppError::unauthorized("Please add the JWT token to the header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header is not a bearer token");
        AppError::unauthorized("Expected a bearer token")
    })?;

    let token_data = decode_jwt(token, &state.jwt_secret)?;

    // L'identità viene sempre ricaricata dal database: il ruolo che conta
    // è quello sulla riga users, non quello dentro il token
    let current_user = state
        .user
        .find_by_email(&token_data.claims.sub)
        .await?
        .ok_or_else(|| {
            warn!("User not found in database: {}", token_data.claims.sub);
            AppError::unauthorized("You are not an authorized user")
        })?;

    info!("User authenticated: {}", current_user.email);
    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

/// Verifica che l'utente corrente abbia uno dei ruoli richiesti
///
/// # Returns
/// * `Ok(())` se il ruolo è permesso
/// * `Err(AppError)` con 403 se il ruolo non basta
#[instrument(skip(user), fields(user_id = %user.user_id))]
pub fn require_role(user: &User, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&user.role) {
        warn!(
            "User {} has insufficient role {:?}, required one of: {:?}",
            user.user_id, user.role, allowed_roles
        );
        return Err(AppError::forbidden("Insufficient role").with_details(format!(
            "This action requires one of the following roles: {:?}",
            allowed_roles
        )));
    }

    Ok(())
}
