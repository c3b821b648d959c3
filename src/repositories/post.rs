//! PostRepository - Repository per la gestione delle postagens

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreatePostDTO, UpdatePostDTO};
use crate::entities::Post;
use sqlx::{Error, MySqlPool};

// POST REPO
pub struct PostRepository {
    connection_pool: MySqlPool,
}

impl PostRepository {
    pub fn new(connection_pool: MySqlPool) -> PostRepository {
        Self { connection_pool }
    }

    /// Tutte le postagens
    pub async fn list_all(&self) -> Result<Vec<Post>, Error> {
        let posts = sqlx::query_as!(
            Post,
            "SELECT post_id, title, description, photo, creator_id, topic_id FROM posts"
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(posts)
    }

    /// Ricerca con filtri opzionali combinati in AND:
    /// titolo (substring), descrizione del tema (substring), email del creatore (esatta).
    /// Nessun filtro presente equivale a list_all.
    ///
    /// La query resta statica: ogni predicato è spento dal suo bind NULL,
    /// così il check a compile time di sqlx continua a valere.
    pub async fn search(
        &self,
        title: Option<&str>,
        topic_description: Option<&str>,
        creator_email: Option<&str>,
    ) -> Result<Vec<Post>, Error> {
        let title_pattern = title.map(|t| format!("%{}%", t));
        let topic_pattern = topic_description.map(|d| format!("%{}%", d));

        let posts = sqlx::query_as!(
            Post,
            r#"
            SELECT p.post_id, p.title, p.description, p.photo, p.creator_id, p.topic_id
            FROM posts p
            INNER JOIN users u ON u.user_id = p.creator_id
            INNER JOIN topics t ON t.topic_id = p.topic_id
            WHERE (? IS NULL OR p.title LIKE ?)
              AND (? IS NULL OR t.description LIKE ?)
              AND (? IS NULL OR u.email = ?)
            "#,
            title_pattern,
            title_pattern,
            topic_pattern,
            topic_pattern,
            creator_email,
            creator_email
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(posts)
    }
}

impl Create<Post, CreatePostDTO> for PostRepository {
    /// L'esistenza di creatore e tema va verificata dal service prima di chiamare
    async fn create(&self, data: &CreatePostDTO) -> Result<Post, Error> {
        let result = sqlx::query!(
            r#"
            INSERT INTO posts (title, description, photo, creator_id, topic_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
            data.title,
            data.description,
            data.photo,
            data.creator.id,
            data.topic.id
        )
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(Post {
            post_id: new_id,
            title: data.title.clone(),
            description: data.description.clone(),
            photo: data.photo.clone(),
            creator_id: data.creator.id,
            topic_id: data.topic.id,
        })
    }
}

impl Read<Post, i32> for PostRepository {
    async fn read(&self, id: &i32) -> Result<Option<Post>, Error> {
        let post = sqlx::query_as!(
            Post,
            "SELECT post_id, title, description, photo, creator_id, topic_id FROM posts WHERE post_id = ?",
            id
        )
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(post)
    }
}

impl Update<Post, UpdatePostDTO, i32> for PostRepository {
    async fn update(&self, id: &i32, data: &UpdatePostDTO) -> Result<Post, Error> {
        let current_post = self
            .read(id)
            .await?
            .ok_or_else(|| sqlx::Error::RowNotFound)?;

        if data.title.is_none()
            && data.description.is_none()
            && data.photo.is_none()
            && data.topic.is_none()
        {
            return Ok(current_post);
        }

        // UPDATE dinamico con QueryBuilder, solo i campi presenti nel DTO.
        // creator_id resta sempre quello originale.
        let mut query_builder = sqlx::QueryBuilder::new("UPDATE posts SET ");

        let mut separated = query_builder.separated(", ");
        if let Some(ref title) = data.title {
            separated.push("title = ");
            separated.push_bind_unseparated(title);
        }
        if let Some(ref description) = data.description {
            separated.push("description = ");
            separated.push_bind_unseparated(description);
        }
        if let Some(ref photo) = data.photo {
            separated.push("photo = ");
            separated.push_bind_unseparated(photo);
        }
        if let Some(ref topic) = data.topic {
            separated.push("topic_id = ");
            separated.push_bind_unseparated(topic.id);
        }

        query_builder.push(" WHERE post_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        self.read(id).await?.ok_or_else(|| sqlx::Error::RowNotFound)
    }
}

impl Delete<i32> for PostRepository {
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query!("DELETE FROM posts WHERE post_id = ?", id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
