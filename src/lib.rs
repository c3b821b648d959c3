//! Blog library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use self::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/Users", configure_user_routes(state.clone()))
        .nest("/api/Temas", configure_topic_routes(state.clone()))
        .nest("/api/Postagens", configure_post_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes degli utenti.
/// Registrazione e login sono anonimi, tutto il resto richiede il token.
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    let public_routes = Router::new()
        .route("/cadastrar", post(register_user))
        .route("/logar", post(login_user));

    let protected_routes = Router::new()
        .route("/", get(list_users).put(update_user))
        .route("/id/{user_id}", get(get_user_by_id))
        .route("/email/{email}", get(get_user_by_email))
        .route("/deletar/{user_id}", delete(delete_user))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}

/// Configura le routes per la gestione dei temi.
/// Tutte richiedono autenticazione, le mutazioni verificano il ruolo nel handler.
fn configure_topic_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/", get(list_topics).post(create_topic).put(update_topic))
        .route("/id/{topic_id}", get(get_topic_by_id))
        .route("/pesquisa", get(search_topics))
        .route("/deletar/{topic_id}", delete(delete_topic))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per la gestione delle postagens (tutte autenticate)
fn configure_post_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    Router::new()
        .route("/", get(list_posts).post(create_post).put(update_post))
        .route("/id/{post_id}", get(get_post_by_id))
        .route("/pesquisa", get(search_posts))
        .route("/deletar/{post_id}", delete(delete_post))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
