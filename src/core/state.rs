//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e la configurazione condivisa
//! necessaria per gestire le richieste.

use crate::repositories::{PostRepository, TopicRepository, UserRepository};
use sqlx::MySqlPool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione dei temi
    pub topic: TopicRepository,

    /// Repository per la gestione delle postagens
    pub post: PostRepository,

    /// Secret key per la firma dei token JWT
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            topic: TopicRepository::new(pool.clone()),
            post: PostRepository::new(pool),
            jwt_secret,
        }
    }
}
