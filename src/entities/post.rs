//! Post entity - Voce del blog, appartiene a un utente e a un tema

use serde::{Deserialize, Serialize};

/// Riga della tabella posts. Le associazioni creator/topic sono
/// rappresentate solo dalle chiavi esterne, la risoluzione in oggetti
/// completi avviene nel layer service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Post {
    pub post_id: i32,
    pub title: String,
    pub description: String,
    pub photo: Option<String>,
    pub creator_id: i32,
    pub topic_id: i32,
}
