//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.

pub mod auth;
pub mod post;
pub mod topic;
pub mod user;

// Re-exports per facilitare l'import
pub use auth::{login_user, register_user};
pub use post::{
    create_post, delete_post, get_post_by_id, list_posts, search_posts, update_post,
};
pub use topic::{
    create_topic, delete_topic, get_topic_by_id, list_topics, search_topics, update_topic,
};
pub use user::{delete_user, get_user_by_email, get_user_by_id, list_users, update_user};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
