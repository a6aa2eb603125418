mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_swagger_ui_served_at_token_path() {
    let server = common::create_test_server().await;

    let response = server
        .get(&format!("/swagger/{}", common::TEST_DOCS_TOKEN))
        .await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("swagger-ui"));
    assert!(html.contains(&format!(
        "/swagger/{}/openapi.json",
        common::TEST_DOCS_TOKEN
    )));
}

#[tokio::test]
async fn test_openapi_document_served() {
    let server = common::create_test_server().await;

    let response = server
        .get(&format!("/swagger/{}/openapi.json", common::TEST_DOCS_TOKEN))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/api/token/"].is_object());
}

#[tokio::test]
async fn test_swagger_wrong_token_not_found() {
    let server = common::create_test_server().await;

    let response = server.get("/swagger/not-the-token").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get("/swagger").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
