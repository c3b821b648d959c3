//! UserRepository - Repository per la gestione degli utenti

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateUserDTO, UpdateUserDTO};
use crate::entities::{User, UserRole};
use sqlx::{Error, MySqlPool};

// USER REPO
pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> UserRepository {
        Self { connection_pool }
    }

    /// Tutti gli utenti registrati
    pub async fn list_all(&self) -> Result<Vec<User>, Error> {
        let users = sqlx::query_as!(
            User,
            r#"
            SELECT user_id, name, email, password, photo, role as "role: UserRole"
            FROM users
            "#
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }

    /// L'email è univoca, match esatto.
    /// Per la ricerca parziale per nome usare find_by_name.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = sqlx::query_as!(
            User,
            r#"
            SELECT user_id, name, email, password, photo, role as "role: UserRole"
            FROM users
            WHERE email = ?
            "#,
            email
        )
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }

    /// Ricerca per nome con match parziale (substring)
    pub async fn find_by_name(&self, name_pattern: &str) -> Result<Vec<User>, Error> {
        let pattern = format!("%{}%", name_pattern);
        let users = sqlx::query_as!(
            User,
            r#"
            SELECT user_id, name, email, password, photo, role as "role: UserRole"
            FROM users
            WHERE name LIKE ?
            "#,
            pattern
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(users)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    /// La password nel DTO deve arrivare già hashata dal service
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let result = sqlx::query!(
            "INSERT INTO users (name, email, password, photo, role) VALUES (?, ?, ?, ?, ?)",
            data.name,
            data.email,
            data.password,
            data.photo,
            data.role
        )
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;

        Ok(User {
            user_id: new_id,
            name: data.name.clone(),
            email: data.email.clone(),
            password: data.password.clone(),
            photo: data.photo.clone(),
            role: data.role,
        })
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let user = sqlx::query_as!(
            User,
            r#"
            SELECT user_id, name, email, password, photo, role as "role: UserRole"
            FROM users
            WHERE user_id = ?
            "#,
            id
        )
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}

impl Update<User, UpdateUserDTO, i32> for UserRepository {
    async fn update(&self, id: &i32, data: &UpdateUserDTO) -> Result<User, Error> {
        // Prima leggiamo la riga corrente, così un id inesistente fallisce subito
        let current_user = self
            .read(id)
            .await?
            .ok_or_else(|| sqlx::Error::RowNotFound)?;

        if data.name.is_none()
            && data.password.is_none()
            && data.photo.is_none()
            && data.role.is_none()
        {
            // Nessun campo da sovrascrivere
            return Ok(current_user);
        }

        // UPDATE dinamico con QueryBuilder, solo i campi presenti nel DTO
        let mut query_builder = sqlx::QueryBuilder::new("UPDATE users SET ");

        let mut separated = query_builder.separated(", ");
        if let Some(ref name) = data.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref password) = data.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }
        if let Some(ref photo) = data.photo {
            separated.push("photo = ");
            separated.push_bind_unseparated(photo);
        }
        if let Some(role) = data.role {
            separated.push("role = ");
            separated.push_bind_unseparated(role);
        }

        query_builder.push(" WHERE user_id = ");
        query_builder.push_bind(id);

        query_builder.build().execute(&self.connection_pool).await?;

        self.read(id).await?.ok_or_else(|| sqlx::Error::RowNotFound)
    }
}

impl Delete<i32> for UserRepository {
    async fn delete(&self, user_id: &i32) -> Result<(), Error> {
        let result = sqlx::query!("DELETE FROM users WHERE user_id = ?", user_id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        Ok(())
    }
}
