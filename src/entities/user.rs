//! User entity - Entità utente con metodi per gestione password

use super::UserRole;
use bcrypt::{DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub user_id: i32,
    pub name: String,
    /// Chiave di business, univoca su tutto il sistema
    pub email: String,
    /// Hash bcrypt, mai la password in chiaro
    pub password: String,
    pub photo: Option<String>,
    pub role: UserRole,
}

impl User {
    /// Verifica che la password candidata corrisponda all'hash memorizzato
    pub fn verify_password(&self, candidate: &str) -> bool {
        verify(candidate, &self.password).unwrap_or(false)
    }

    /// Hash di una password con bcrypt e costo di default
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        let hashed = hash(password, DEFAULT_COST)?;
        Ok(hashed)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Administrador
    }
}
