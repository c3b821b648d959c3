//! Topic services - Gestione dei temi
//!
//! La lettura è aperta a ogni utente autenticato, le mutazioni
//! sono riservate agli amministratori.

use crate::core::{AppError, AppState, require_role};
use crate::dtos::{CreateTopicDTO, TopicDTO, TopicSearchQuery, UpdateTopicDTO};
use crate::entities::{User, UserRole};
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_topics(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    debug!("Listing topics");
    let topics = state.topic.list_all().await?;

    if topics.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    info!("Found {} topics", topics.len());
    let topics_dto = topics.into_iter().map(TopicDTO::from).collect::<Vec<_>>();
    Ok(Json(topics_dto).into_response())
}

#[instrument(skip(state), fields(topic_id = %topic_id))]
pub async fn get_topic_by_id(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<i32>, // parametro dalla URL /api/Temas/id/{topic_id}
) -> Result<Json<TopicDTO>, AppError> {
    debug!("Fetching topic by ID");
    let topic = state.topic.read(&topic_id).await?.ok_or_else(|| {
        warn!("Topic not found");
        AppError::not_found("Topic id not found")
    })?;

    Ok(Json(TopicDTO::from(topic)))
}

/// Ricerca per descrizione, match parziale
#[instrument(skip(state), fields(search = %params.description))]
pub async fn search_topics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopicSearchQuery>, // query params /api/Temas/pesquisa?descricaoTema=...
) -> Result<Response, AppError> {
    debug!("Searching topics by description");
    let topics = state.topic.find_by_description(&params.description).await?;

    if topics.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    info!("Found {} topics matching search criteria", topics.len());
    let topics_dto = topics.into_iter().map(TopicDTO::from).collect::<Vec<_>>();
    Ok(Json(topics_dto).into_response())
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn create_topic(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
    Json(body): Json<CreateTopicDTO>,
) -> Result<(StatusCode, Json<TopicDTO>), AppError> {
    debug!("Creating new topic");
    require_role(&current_user, &[UserRole::Administrador])?;
    body.validate()?;

    let created_topic = state.topic.create(&body).await?;

    info!("Topic created with id {}", created_topic.topic_id);
    Ok((StatusCode::CREATED, Json(TopicDTO::from(created_topic))))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, topic_id = %body.id))]
pub async fn update_topic(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateTopicDTO>,
) -> Result<Json<TopicDTO>, AppError> {
    debug!("Updating topic");
    require_role(&current_user, &[UserRole::Administrador])?;
    body.validate()?;

    // Un id inesistente su un update è un errore di richiesta
    state.topic.read(&body.id).await?.ok_or_else(|| {
        warn!("Update attempted on unknown topic id");
        AppError::bad_request("Topic id not found")
    })?;

    let updated_topic = state.topic.update(&body.id, &body).await?;

    info!("Topic updated");
    Ok(Json(TopicDTO::from(updated_topic)))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, topic_id = %topic_id))]
pub async fn delete_topic(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Path(topic_id): Path<i32>, // parametro dalla URL /api/Temas/deletar/{topic_id}
) -> Result<StatusCode, AppError> {
    debug!("Deleting topic");
    require_role(&current_user, &[UserRole::Administrador])?;

    // Un tema ancora referenziato da postagens non si cancella
    if state.topic.has_posts(&topic_id).await? {
        warn!("Delete attempted on a topic still referenced by posts");
        return Err(AppError::bad_request(
            "Topic is still referenced by posts and cannot be deleted",
        ));
    }

    state.topic.delete(&topic_id).await?;

    info!("Topic deleted");
    Ok(StatusCode::NO_CONTENT)
}
