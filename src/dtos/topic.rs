//! Topic DTOs - Data Transfer Objects per i temi

use crate::entities::Topic;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TopicDTO {
    pub id: Option<i32>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

impl From<Topic> for TopicDTO {
    fn from(value: Topic) -> Self {
        Self {
            id: Some(value.topic_id),
            description: Some(value.description),
        }
    }
}

/// DTO per creare un nuovo tema (senza topic_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateTopicDTO {
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, max = 255, message = "description must be 1-255 characters"))]
    pub description: String,
}

/// DTO per aggiornare un tema esistente
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateTopicDTO {
    pub id: i32,
    #[serde(rename = "descricao")]
    #[validate(length(min = 1, max = 255, message = "description must be 1-255 characters"))]
    pub description: Option<String>,
}
