#![allow(dead_code)] // ogni binario di test usa solo una parte degli helper

use axum_test::TestServer;
use blogpessoal::core::AppState;
use sqlx::MySqlPool;
use std::sync::Arc;

/// Secret condiviso tra server di test e generatore di token
pub const TEST_JWT_SECRET: &str = "segreto-solo-per-i-test";

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool MySQL fornito da #[sqlx::test]
pub fn create_test_state(pool: MySqlPool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Crea un TestServer pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = blogpessoal::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Genera un JWT valido per le richieste autenticate nei test.
/// L'utente con questa email deve esistere nei fixtures, il middleware
/// lo ricarica dal database.
///
/// # Arguments
/// * `email` - Email dell'utente (claim `sub`)
/// * `role` - Ruolo come stringa, "NORMAL" oppure "ADMINISTRADOR"
pub fn create_test_jwt(email: &str, role: &str) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        exp: usize,
        iat: usize,
        sub: String,
        role: String,
    }

    let now = Utc::now();
    let claims = Claims {
        exp: (now + Duration::hours(2)).timestamp() as usize,
        iat: now.timestamp() as usize,
        sub: email.to_string(),
        role: role.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Scorciatoie per i due utenti dei fixtures
pub fn admin_jwt() -> String {
    create_test_jwt("alice@email.com", "ADMINISTRADOR")
}

pub fn normal_jwt() -> String {
    create_test_jwt("bruno@email.com", "NORMAL")
}
