//! Post DTOs - Data Transfer Objects per le postagens

use crate::dtos::{TopicDTO, UserDTO};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Riferimento a un'entità collegata, il client passa solo l'id
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EntityRefDTO {
    pub id: i32,
}

/// DTO arricchito: ogni postagem esce sempre con creatore e tema risolti
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostDTO {
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "criador")]
    pub creator: Option<UserDTO>,
    #[serde(rename = "tema")]
    pub topic: Option<TopicDTO>,
}

/// DTO per creare una nuova postagem. Creatore e tema vengono passati
/// come riferimenti per id, entrambi obbligatori.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePostDTO {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "criador")]
    pub creator: EntityRefDTO,
    #[serde(rename = "tema")]
    pub topic: EntityRefDTO,
}

/// DTO per aggiornare una postagem. Il creatore non si cambia,
/// il tema può essere sostituito con un altro esistente.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdatePostDTO {
    pub id: i32,
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: Option<String>,
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: Option<String>,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "tema")]
    pub topic: Option<EntityRefDTO>,
}
