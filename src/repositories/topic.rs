//! TopicRepository - Repository per la gestione dei temi

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateTopicDTO, UpdateTopicDTO};
use crate::entities::Topic;
use sqlx::{Error, MySqlPool};

// TOPIC REPO
pub struct TopicRepository {
    connection_pool: MySqlPool,
}

impl TopicRepository {
    pub fn new(connection_pool: MySqlPool) -> TopicRepository {
        Self { connection_pool }
    }

    /// Tutti i temi registrati
    pub async fn list_all(&self) -> Result<Vec<Topic>, Error> {
        let topics = sqlx::query_as!(
            Topic,
            "SELECT topic_id, description FROM topics"
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(topics)
    }

    /// Ricerca per descrizione con match parziale (substring)
    pub async fn find_by_description(&self, description_pattern: &str) -> Result<Vec<Topic>, Error> {
        let pattern = format!("%{}%", description_pattern);
        let topics = sqlx::query_as!(
            Topic,
            "SELECT topic_id, description FROM topics WHERE description LIKE ?",
            pattern
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(topics)
    }

    /// True se almeno una postagem referenzia ancora il tema.
    /// Un tema referenziato non si può cancellare.
    pub async fn has_posts(&self, topic_id: &i32) -> Result<bool, Error> {
        let count = sqlx::query!(
            "SELECT COUNT(*) as count FROM posts WHERE topic_id = ?",
            topic_id
        )
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(count.count > 0)
    }
}

impl Create<Topic, CreateTopicDTO> for TopicRepository {
    async fn create(&self, data: &CreateTopicDTO) -> Result<Topic, Error> {
        let result = sqlx::query!(
            "INSERT INTO topics (description) VALUES (?)",
            data.description
        )
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(Topic {
            topic_id: new_id,
            description: data.description.clone(),
        })
    }
}

impl Read<Topic, i32> for TopicRepository {
    async fn read(&self, id: &i32) -> Result<Option<Topic>, Error> {
        let topic = sqlx::query_as!(
            Topic,
            "SELECT topic_id, description FROM topics WHERE topic_id = ?",
            id
        )
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(topic)
    }
}

impl Update<Topic, UpdateTopicDTO, i32> for TopicRepository {
    async fn update(&self, id: &i32, data: &UpdateTopicDTO) -> Result<Topic, Error> {
        let current_topic = self
            .read(id)
            .await?
            .ok_or_else(|| sqlx::Error::RowNotFound)?;

        // L'unico campo mutabile è la descrizione
        if let Some(ref description) = data.description {
            sqlx::query!(
                "UPDATE topics SET description = ? WHERE topic_id = ?",
                description,
                id
            )
            .execute(&self.connection_pool)
            .await?;

            self.read(id).await?.ok_or_else(|| sqlx::Error::RowNotFound)
        } else {
            Ok(current_topic)
        }
    }
}

impl Delete<i32> for TopicRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query!("DELETE FROM topics WHERE topic_id = ?", id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
