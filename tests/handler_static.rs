mod common;

use api_console::routes::build_router;
use axum_test::TestServer;

async fn create_server(serve_static: bool) -> TestServer {
    let state = common::create_test_state().await;
    TestServer::new(build_router(state, serve_static)).unwrap()
}

#[tokio::test]
async fn test_static_file_served_in_debug() {
    let server = create_server(true).await;

    let response = server.get("/static/robots.txt").await;

    response.assert_status_ok();
    assert!(response.text().contains("Disallow: /swagger/"));
}

#[tokio::test]
async fn test_static_missing_file_not_found_in_debug() {
    let server = create_server(true).await;

    let response = server.get("/static/missing.css").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_static_route_absent_without_debug() {
    let server = create_server(false).await;

    let response = server.get("/static/robots.txt").await;

    response.assert_status_not_found();
}
