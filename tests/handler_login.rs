mod common;

use api_console::domain::docs_token::DocsToken;
use api_console::routes::app_router;
use api_console::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;

const FAILURE_MESSAGE: &str = "please login with correct credentials";

#[tokio::test]
async fn test_login_page_renders_form() {
    let server = common::create_test_server().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"name\""));
    assert!(html.contains("name=\"password\""));
    assert!(!html.contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_login_success_redirects_to_docs() {
    let server = common::create_test_server().await;

    let response = server
        .post("/")
        .form(&[("name", "alice"), ("password", "secret123")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        format!("/swagger/{}", common::TEST_DOCS_TOKEN).as_str()
    );
}

#[tokio::test]
async fn test_login_wrong_password_rerenders_with_message() {
    let server = common::create_test_server().await;

    let response = server
        .post("/")
        .form(&[("name", "alice"), ("password", "wrong")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_login_unknown_user_does_not_crash() {
    let server = common::create_test_server().await;

    let response = server
        .post("/")
        .form(&[("name", "bob"), ("password", "x")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(FAILURE_MESSAGE));

    // The server keeps serving after the failed lookup.
    let response = server
        .post("/")
        .form(&[("name", "alice"), ("password", "secret123")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_missing_fields_rejected() {
    let server = common::create_test_server().await;

    let response = server.post("/").form(&[("name", "alice")]).await;

    response.assert_status_ok();
    assert!(response.text().contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_login_password_is_case_sensitive() {
    let server = common::create_test_server().await;

    let response = server
        .post("/")
        .form(&[("name", "alice"), ("password", "SECRET123")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_every_registered_user_can_login() {
    let server = common::create_test_server().await;

    for (name, password) in [("alice", "secret123"), ("carol", "hunter2")] {
        let response = server
            .post("/")
            .form(&[("name", name), ("password", password)])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
    }
}

#[tokio::test]
async fn test_redirect_target_stable_within_state() {
    let state = common::create_test_state().await;
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let mut targets = Vec::new();
    for _ in 0..3 {
        let response = server
            .post("/")
            .form(&[("name", "alice"), ("password", "secret123")])
            .await;
        targets.push(response.header("location").to_str().unwrap().to_string());
    }

    assert!(targets.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_redirect_target_differs_between_startups() {
    let store = common::create_test_store().await;
    let first = AppState::new(
        store.clone(),
        common::test_token_service(),
        DocsToken::generate(),
    );
    let second = AppState::new(store, common::test_token_service(), DocsToken::generate());

    let mut targets = Vec::new();
    for state in [first, second] {
        let server = TestServer::new(common::create_test_app(state)).unwrap();
        let response = server
            .post("/")
            .form(&[("name", "alice"), ("password", "secret123")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        targets.push(response.header("location").to_str().unwrap().to_string());
    }

    assert_ne!(targets[0], targets[1]);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let state = common::create_test_state().await;
    let app = Router::new().fallback_service(app_router(state, false));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/token/")
        .json(&serde_json::json!({ "username": "alice", "password": "secret123" }))
        .await;

    response.assert_status_ok();
}
