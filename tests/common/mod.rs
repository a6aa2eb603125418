#![allow(dead_code)]

use api_console::application::services::TokenService;
use api_console::domain::docs_token::DocsToken;
use api_console::infrastructure::persistence::InMemoryCredentialRepository;
use api_console::routes::build_router;
use api_console::state::AppState;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret-key";
pub const TEST_DOCS_TOKEN: &str = "TestDocsToken0123456789abcdefXYZ";

pub async fn create_test_store() -> Arc<InMemoryCredentialRepository> {
    let store = InMemoryCredentialRepository::with_records(&[
        ("alice", "secret123", "ad"),
        ("carol", "hunter2", "us"),
    ])
    .await
    .unwrap();

    Arc::new(store)
}

pub fn test_token_service() -> TokenService {
    TokenService::new(TEST_SECRET, 300, 86_400)
}

pub async fn create_test_state() -> AppState {
    let store = create_test_store().await;
    AppState::new(store, test_token_service(), DocsToken::from(TEST_DOCS_TOKEN))
}

pub fn create_test_app(state: AppState) -> Router {
    build_router(state, false)
}

pub async fn create_test_server() -> TestServer {
    let state = create_test_state().await;
    TestServer::new(create_test_app(state)).unwrap()
}

/// Obtains an access/refresh pair for a seeded user through the API.
pub async fn obtain_tokens(
    server: &TestServer,
    username: &str,
    password: &str,
) -> (String, String) {
    let response = server
        .post("/api/token")
        .json(&serde_json::json!({ "username": username, "password": password }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    (
        json["access"].as_str().unwrap().to_string(),
        json["refresh"].as_str().unwrap().to_string(),
    )
}
