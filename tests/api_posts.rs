//! Integration tests per gli endpoint delle postagens
//!
//! Test per:
//! - GET /api/Postagens
//! - GET /api/Postagens/id/{id}
//! - GET /api/Postagens/pesquisa (filtri opzionali combinati in AND)
//! - POST /api/Postagens
//! - PUT /api/Postagens
//! - DELETE /api/Postagens/deletar/{id}
//!
//! Dati di partenza nei fixtures:
//! - postagem 1: "Rust é muito massa", tema Rust, creatrice alice
//! - postagem 2: "Rust com testes", tema Rust, creatore bruno
//! - postagem 3: "Java é muito massa", tema Java, creatore bruno

mod common;

#[cfg(test)]
mod post_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::MySqlPool;

    // ============================================================
    // Lettura e arricchimento
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_posts_require_auth(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/api/Postagens").await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_list_posts_resolves_associations(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        let posts = posts.as_array().expect("expected a list");
        assert_eq!(posts.len(), 3);

        // ogni postagem esce con creatore e tema risolti
        for post in posts {
            assert!(post["criador"]["email"].is_string());
            assert!(post["tema"]["descricao"].is_string());
        }

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_posts_empty(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_get_post_by_id(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/id/1")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let post: serde_json::Value = response.json();
        assert_eq!(post["titulo"], "Rust é muito massa");
        assert_eq!(post["criador"]["email"], "alice@email.com");
        assert_eq!(post["tema"]["descricao"], "Rust");

        let missing = server
            .get("/api/Postagens/id/999")
            .authorization_bearer(&normal_jwt())
            .await;
        missing.assert_status_not_found();

        Ok(())
    }

    // ============================================================
    // Test per GET /api/Postagens/pesquisa - search_posts
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_without_filters_returns_all(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        assert_eq!(posts.as_array().expect("expected a list").len(), 3);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_by_title_substring(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("tituloPostagem", "massa")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        assert_eq!(posts.as_array().expect("expected a list").len(), 2);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_by_topic_description(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("descricaoTema", "Rust")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        assert_eq!(posts.as_array().expect("expected a list").len(), 2);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_by_creator_email_exact(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("emailCriador", "bruno@email.com")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        assert_eq!(posts.as_array().expect("expected a list").len(), 2);

        // l'email è un match esatto, un prefisso non trova niente
        let prefix = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("emailCriador", "bruno")
            .authorization_bearer(&normal_jwt())
            .await;
        prefix.assert_status(StatusCode::NO_CONTENT);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_two_filters_compose_in_and(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // "massa" da solo trova 2 postagens, il tema Rust restringe a 1
        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("tituloPostagem", "massa")
            .add_query_param("descricaoTema", "Rust")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        let posts = posts.as_array().expect("expected a list");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["titulo"], "Rust é muito massa");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_three_filters_compose_in_and(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("tituloPostagem", "massa")
            .add_query_param("descricaoTema", "Rust")
            .add_query_param("emailCriador", "alice@email.com")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let posts: serde_json::Value = response.json();
        let posts = posts.as_array().expect("expected a list");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["criador"]["email"], "alice@email.com");

        // con i tre filtri in AND basta cambiare l'email per azzerare i risultati
        let none = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("tituloPostagem", "massa")
            .add_query_param("descricaoTema", "Rust")
            .add_query_param("emailCriador", "bruno@email.com")
            .authorization_bearer(&normal_jwt())
            .await;
        none.assert_status(StatusCode::NO_CONTENT);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_search_without_match(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("tituloPostagem", "inesistente")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        Ok(())
    }

    // ============================================================
    // Test per POST /api/Postagens - create_post
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_create_post(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({
            "titulo": "Culinária de verdade",
            "descricao": "Receitas da casa",
            "foto": "https://imagens.blog/cozinha.png",
            "criador": { "id": 2 },
            "tema": { "id": 3 }
        });

        let response = server
            .post("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status(StatusCode::CREATED);
        let post: serde_json::Value = response.json();
        assert_eq!(post["titulo"], "Culinária de verdade");
        assert_eq!(post["criador"]["id"], 2);
        assert_eq!(post["tema"]["descricao"], "Culinaria");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_create_post_unknown_creator(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool.clone());
        let server = create_test_server(state);

        let body = json!({
            "titulo": "Postagem fantasma",
            "descricao": "Não deveria existir",
            "criador": { "id": 999 },
            "tema": { "id": 1 }
        });

        let response = server
            .post("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_bad_request();

        // niente è stato persistito
        let count = sqlx::query!("SELECT COUNT(*) as count FROM posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.count, 3);

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_create_post_unknown_topic(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool.clone());
        let server = create_test_server(state);

        let body = json!({
            "titulo": "Postagem fantasma",
            "descricao": "Não deveria existir",
            "criador": { "id": 1 },
            "tema": { "id": 999 }
        });

        let response = server
            .post("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_bad_request();

        let count = sqlx::query!("SELECT COUNT(*) as count FROM posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.count, 3);

        Ok(())
    }

    /// Lo scenario completo: nuovo tema, nuova postagem, poi ricerca
    /// solo per la descrizione del tema
    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_create_then_search_by_new_topic(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let topic_response = server
            .post("/api/Temas")
            .json(&json!({ "descricao": "Go" }))
            .authorization_bearer(&admin_jwt())
            .await;
        topic_response.assert_status(StatusCode::CREATED);
        let topic: serde_json::Value = topic_response.json();
        let topic_id = topic["id"].as_i64().expect("topic id");

        let post_body = json!({
            "titulo": "Go para gophers",
            "descricao": "Concorrência sem medo",
            "criador": { "id": 1 },
            "tema": { "id": topic_id }
        });
        server
            .post("/api/Postagens")
            .json(&post_body)
            .authorization_bearer(&admin_jwt())
            .await
            .assert_status(StatusCode::CREATED);

        let search = server
            .get("/api/Postagens/pesquisa")
            .add_query_param("descricaoTema", "Go")
            .authorization_bearer(&admin_jwt())
            .await;

        search.assert_status_ok();
        let posts: serde_json::Value = search.json();
        let posts = posts.as_array().expect("expected a list");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["titulo"], "Go para gophers");

        Ok(())
    }

    // ============================================================
    // Test per PUT /api/Postagens - update_post
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_update_post_partial_overwrite(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({
            "id": 1,
            "titulo": "Rust continua muito massa",
            "tema": { "id": 2 }
        });

        let response = server
            .put("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_ok();
        let post: serde_json::Value = response.json();
        assert_eq!(post["titulo"], "Rust continua muito massa");
        assert_eq!(post["tema"]["descricao"], "Java");
        // la descrizione non era nel body e resta invariata
        assert_eq!(post["descricao"], "A linguagem mais amada do mundo");
        // il creatore non cambia mai
        assert_eq!(post["criador"]["email"], "alice@email.com");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_update_unknown_post(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({
            "id": 999,
            "titulo": "Fantasma"
        });

        let response = server
            .put("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_update_post_unknown_topic(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({
            "id": 1,
            "tema": { "id": 999 }
        });

        let response = server
            .put("/api/Postagens")
            .json(&body)
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    // ============================================================
    // Test per DELETE /api/Postagens/deletar/{id} - delete_post
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_delete_post(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .delete("/api/Postagens/deletar/1")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status(StatusCode::NO_CONTENT);

        let lookup = server
            .get("/api/Postagens/id/1")
            .authorization_bearer(&normal_jwt())
            .await;
        lookup.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "topics", "posts")))]
    async fn test_delete_unknown_post(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool.clone());
        let server = create_test_server(state);

        let response = server
            .delete("/api/Postagens/deletar/999")
            .authorization_bearer(&normal_jwt())
            .await;

        response.assert_status_not_found();

        // il database resta intatto
        let count = sqlx::query!("SELECT COUNT(*) as count FROM posts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count.count, 3);

        Ok(())
    }
}
