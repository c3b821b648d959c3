//! Auth services - Registrazione e login degli utenti

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// DTO per il login (solo email e password)
#[derive(Deserialize)]
pub struct LoginDTO {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

/// Risposta del login: l'utente autenticato e il token già con prefisso,
/// pronto per essere copiato nell'header Authorization
#[derive(Serialize)]
pub struct LoginResponseDTO {
    #[serde(rename = "usuario")]
    pub user: UserDTO,
    pub token: String,
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserDTO>, // JSON body
) -> Result<(StatusCode, Json<UserDTO>), AppError> {
    debug!("Registering new user");
    // 1. Validare il DTO (formato email, lunghezza di nome e password)
    // 2. Controllare che l'email non sia già registrata
    // 3. Hashare la password prima di persistere
    // 4. Salvare il nuovo utente e ritornarlo come DTO, senza password

    body.validate()?;

    if state.user.find_by_email(&body.email).await?.is_some() {
        warn!("Registration attempted with an email already in use");
        return Err(AppError::unauthorized("Email is already in use"));
    }

    let password_hash = User::hash_password(&body.password)?;

    let new_user = CreateUserDTO {
        password: password_hash,
        ..body
    };

    let created_user = state.user.create(&new_user).await?;

    info!("User registered with id {}", created_user.user_id);
    Ok((StatusCode::CREATED, Json(UserDTO::from(created_user))))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<Json<LoginResponseDTO>, AppError> {
    debug!("Login attempt");
    // 1. Cercare l'utente per email, se assente UNAUTHORIZED
    // 2. Verificare la password contro l'hash memorizzato, se diversa UNAUTHORIZED
    // 3. Emettere il token firmato con email e ruolo e ritornare utente + token

    let user = state
        .user
        .find_by_email(&body.email)
        .await?
        .ok_or_else(|| {
            warn!("Login attempted with unknown email");
            AppError::unauthorized("Invalid email")
        })?;

    if !user.verify_password(&body.password) {
        warn!("Login attempted with wrong password");
        return Err(AppError::unauthorized("Invalid password"));
    }

    let token = encode_jwt(user.email.clone(), user.role, &state.jwt_secret)?;

    info!("User logged in");
    Ok(Json(LoginResponseDTO {
        user: UserDTO::from(user),
        token: format!("Bearer {}", token),
    }))
}
