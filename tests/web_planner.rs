mod common;

use axum_test::TestServer;
use giftbox_assistant::web::routes::public_routes;

fn server() -> TestServer {
    let app = public_routes().with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_planner_page_defaults() {
    let server = server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Trợ lý hỗ trợ xếp hộp quà"));
    assert!(body.contains("Chiều dài: 100 mm"));
    assert!(body.contains("rectangular%20box%20dieline%20vector"));
    assert!(!body.contains("Nắp hộp"));
}

#[tokio::test]
async fn test_planner_page_with_lid() {
    let server = server();

    let response = server
        .get("/")
        .add_query_param("shape", "cube")
        .add_query_param("side", "75")
        .add_query_param("criteria", "lid_base")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Cạnh: 75 mm"));
    assert!(body.contains("Cạnh: 77 mm"));
    assert!(body.contains("cube%20box%20two%20piece%20rigid%20box"));
}

#[tokio::test]
async fn test_planner_page_ignores_bad_values() {
    let server = server();

    let response = server
        .get("/")
        .add_query_param("shape", "hexagon")
        .add_query_param("length", "abc")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Chiều dài: 100 mm"));
}
