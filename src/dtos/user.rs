//! User DTOs - Data Transfer Objects per utenti
//!
//! I nomi dei campi sul wire seguono il contratto dell'API
//! (`nome`, `senha`, `foto`, `tipo`), gli identificatori interni restano in inglese.

use crate::entities::{User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: Option<i32>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "tipo")]
    pub role: Option<UserRole>,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: Some(value.user_id),
            name: Some(value.name),
            email: Some(value.email),
            photo: value.photo,
            role: Some(value.role),
            // la password non compare proprio nel DTO, mai esposta al client
        }
    }
}

/// DTO per la registrazione di un nuovo utente (senza user_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(rename = "senha")]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "tipo", default)]
    pub role: UserRole,
}

/// DTO per aggiornare un utente. L'id identifica il bersaglio,
/// solo i campi presenti vengono sovrascritti.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateUserDTO {
    pub id: i32,
    #[serde(rename = "nome")]
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: Option<String>,
    #[serde(rename = "senha")]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
    #[serde(rename = "tipo")]
    pub role: Option<UserRole>,
}
