//! User services - Gestione utenti

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{UpdateUserDTO, UserDTO, UserSearchQuery};
use crate::entities::{User, UserRole};
use crate::repositories::{Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Lista completa, oppure filtrata per nome se `?nomeUsuario=` è presente.
/// Lista vuota risponde 204, non 200 con array vuoto.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserSearchQuery>, // query params /api/Users?nomeUsuario=...
) -> Result<Response, AppError> {
    debug!("Listing users");
    let users = match params.name {
        Some(ref name) => state.user.find_by_name(name).await?,
        None => state.user.list_all().await?,
    };

    if users.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    info!("Found {} users", users.len());
    let users_dto = users.into_iter().map(UserDTO::from).collect::<Vec<_>>();
    Ok(Json(users_dto).into_response())
}

#[instrument(skip(state), fields(user_id = %user_id))]
pub async fn get_user_by_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>, // parametro dalla URL /api/Users/id/{user_id}
) -> Result<Json<UserDTO>, AppError> {
    debug!("Fetching user by ID");
    let user = state.user.read(&user_id).await?.ok_or_else(|| {
        warn!("User not found");
        AppError::not_found("User id not found")
    })?;

    Ok(Json(UserDTO::from(user)))
}

#[instrument(skip(state), fields(email = %email))]
pub async fn get_user_by_email(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>, // parametro dalla URL /api/Users/email/{email}
) -> Result<Json<UserDTO>, AppError> {
    debug!("Fetching user by email");
    let user = state.user.find_by_email(&email).await?.ok_or_else(|| {
        warn!("User not found");
        AppError::not_found("User email not found")
    })?;

    Ok(Json(UserDTO::from(user)))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, target_id = %body.id))]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
    Json(body): Json<UpdateUserDTO>,
) -> Result<Json<UserDTO>, AppError> {
    debug!("Updating user");
    // 1. Validare i campi presenti nel body
    // 2. Solo il proprietario dell'account o un amministratore possono modificarlo
    // 3. Un id inesistente è un errore di richiesta, non un not found
    // 4. Se arriva una password nuova va rihashata prima della persistenza
    // 5. Sovrascrittura parziale: i campi assenti restano invariati

    body.validate()?;

    if current_user.user_id != body.id {
        require_role(&current_user, &[UserRole::Administrador])?;
    }

    // Cambiare ruolo resta un'operazione amministrativa, anche sul proprio account
    if body.role.is_some() {
        require_role(&current_user, &[UserRole::Administrador])?;
    }

    state.user.read(&body.id).await?.ok_or_else(|| {
        warn!("Update attempted on unknown user id");
        AppError::bad_request("User id not found")
    })?;

    let mut data = body;
    if let Some(password) = data.password.take() {
        data.password = Some(User::hash_password(&password)?);
    }

    let updated_user = state.user.update(&data.id, &data).await?;

    info!("User updated");
    Ok(Json(UserDTO::from(updated_user)))
}

#[instrument(skip(state, current_user), fields(user_id = %user_id, requested_by = %current_user.user_id))]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i32>, // parametro dalla URL /api/Users/deletar/{user_id}
) -> Result<StatusCode, AppError> {
    debug!("Deleting user");
    require_role(&current_user, &[UserRole::Administrador])?;

    // RowNotFound del repository diventa 404
    state.user.delete(&user_id).await?;

    info!("User deleted");
    Ok(StatusCode::NO_CONTENT)
}
