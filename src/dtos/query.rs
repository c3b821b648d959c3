//! Query DTOs - Data Transfer Objects per query di ricerca

use serde::{Deserialize, Serialize};

/// DTO per query parameters di ricerca utenti (`?nomeUsuario=...`).
/// Senza parametro la route ritorna la lista completa.
#[derive(Serialize, Deserialize, Debug)]
pub struct UserSearchQuery {
    #[serde(rename = "nomeUsuario", default)]
    pub name: Option<String>,
}

/// DTO per la ricerca dei temi per descrizione
#[derive(Serialize, Deserialize, Debug)]
pub struct TopicSearchQuery {
    #[serde(rename = "descricaoTema")]
    pub description: String,
}

/// DTO per la ricerca delle postagens. Tutti i filtri sono opzionali,
/// quelli presenti vengono combinati in AND.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PostSearchQuery {
    #[serde(rename = "tituloPostagem", default)]
    pub title: Option<String>,
    #[serde(rename = "descricaoTema", default)]
    pub topic_description: Option<String>,
    #[serde(rename = "emailCriador", default)]
    pub creator_email: Option<String>,
}
