mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_hello_with_access_token() {
    let server = common::create_test_server().await;
    let (access, _) = common::obtain_tokens(&server, "alice", "secret123").await;

    let response = server.get("/api/hello").authorization_bearer(access).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Hello, alice!");
}

#[tokio::test]
async fn test_hello_without_token() {
    let server = common::create_test_server().await;

    let response = server.get("/api/hello").await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_authenticated");
}

#[tokio::test]
async fn test_hello_with_refresh_token() {
    let server = common::create_test_server().await;
    let (_, refresh) = common::obtain_tokens(&server, "alice", "secret123").await;

    let response = server.get("/api/hello").authorization_bearer(refresh).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_hello_with_garbage_token() {
    let server = common::create_test_server().await;

    let response = server
        .get("/api/hello")
        .authorization_bearer("not-a-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "token_not_valid");
}
