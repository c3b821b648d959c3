//! Post services - Gestione delle postagens
//!
//! Ogni risposta esce arricchita: le chiavi esterne della riga vengono
//! risolte negli oggetti creatore e tema completi.

use crate::core::{AppError, AppState};
use crate::dtos::{CreatePostDTO, PostDTO, PostSearchQuery, TopicDTO, UpdatePostDTO, UserDTO};
use crate::entities::Post;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Risolve creatore e tema di una postagem con due letture per chiave primaria
async fn enrich_post(state: &AppState, post: Post) -> Result<PostDTO, AppError> {
    let (creator, topic) = tokio::try_join!(
        state.user.read(&post.creator_id),
        state.topic.read(&post.topic_id)
    )?;

    Ok(PostDTO {
        id: post.post_id,
        title: post.title,
        description: post.description,
        photo: post.photo,
        creator: creator.map(UserDTO::from),
        topic: topic.map(TopicDTO::from),
    })
}

/// Arricchisce una lista di postagens con letture parallele
async fn enrich_posts(state: &AppState, posts: Vec<Post>) -> Result<Vec<PostDTO>, AppError> {
    try_join_all(posts.into_iter().map(|post| enrich_post(state, post))).await
}

#[instrument(skip(state))]
pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    debug!("Listing posts");
    let posts = state.post.list_all().await?;

    if posts.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let posts_dto = enrich_posts(&state, posts).await?;
    info!("Found {} posts", posts_dto.len());
    Ok(Json(posts_dto).into_response())
}

#[instrument(skip(state), fields(post_id = %post_id))]
pub async fn get_post_by_id(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i32>, // parametro dalla URL /api/Postagens/id/{post_id}
) -> Result<Json<PostDTO>, AppError> {
    debug!("Fetching post by ID");
    let post = state.post.read(&post_id).await?.ok_or_else(|| {
        warn!("Post not found");
        AppError::not_found("Post id not found")
    })?;

    Ok(Json(enrich_post(&state, post).await?))
}

/// Ricerca con filtri opzionali: titolo, descrizione del tema, email del
/// creatore. I filtri presenti si combinano sempre in AND.
#[instrument(skip(state))]
pub async fn search_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostSearchQuery>, // query params /api/Postagens/pesquisa?...
) -> Result<Response, AppError> {
    debug!("Searching posts");
    let posts = state
        .post
        .search(
            params.title.as_deref(),
            params.topic_description.as_deref(),
            params.creator_email.as_deref(),
        )
        .await?;

    if posts.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let posts_dto = enrich_posts(&state, posts).await?;
    info!("Found {} posts matching search criteria", posts_dto.len());
    Ok(Json(posts_dto).into_response())
}

#[instrument(skip(state, body), fields(creator_id = %body.creator.id, topic_id = %body.topic.id))]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePostDTO>,
) -> Result<(StatusCode, Json<PostDTO>), AppError> {
    debug!("Creating new post");
    // 1. Validare il body
    // 2. Creatore e tema devono esistere entrambi prima di scrivere la riga
    // 3. Salvare e ritornare la postagem già arricchita

    body.validate()?;

    let creator = state.user.read(&body.creator.id).await?.ok_or_else(|| {
        warn!("Post creation attempted with unknown creator id");
        AppError::bad_request("Creator id not found")
    })?;

    let topic = state.topic.read(&body.topic.id).await?.ok_or_else(|| {
        warn!("Post creation attempted with unknown topic id");
        AppError::bad_request("Topic id not found")
    })?;

    let created_post = state.post.create(&body).await?;

    info!("Post created with id {}", created_post.post_id);
    Ok((
        StatusCode::CREATED,
        Json(PostDTO {
            id: created_post.post_id,
            title: created_post.title,
            description: created_post.description,
            photo: created_post.photo,
            creator: Some(UserDTO::from(creator)),
            topic: Some(TopicDTO::from(topic)),
        }),
    ))
}

#[instrument(skip(state, body), fields(post_id = %body.id))]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UpdatePostDTO>,
) -> Result<Json<PostDTO>, AppError> {
    debug!("Updating post");
    // Sovrascrittura parziale: titolo, descrizione, foto e tema.
    // Il creatore non cambia mai dopo la creazione.

    body.validate()?;

    state.post.read(&body.id).await?.ok_or_else(|| {
        warn!("Update attempted on unknown post id");
        AppError::bad_request("Post id not found")
    })?;

    if let Some(ref topic) = body.topic {
        state.topic.read(&topic.id).await?.ok_or_else(|| {
            warn!("Post update attempted with unknown topic id");
            AppError::bad_request("Topic id not found")
        })?;
    }

    let updated_post = state.post.update(&body.id, &body).await?;

    info!("Post updated");
    Ok(Json(enrich_post(&state, updated_post).await?))
}

#[instrument(skip(state), fields(post_id = %post_id))]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i32>, // parametro dalla URL /api/Postagens/deletar/{post_id}
) -> Result<StatusCode, AppError> {
    debug!("Deleting post");
    // RowNotFound del repository diventa 404
    state.post.delete(&post_id).await?;

    info!("Post deleted");
    Ok(StatusCode::NO_CONTENT)
}
