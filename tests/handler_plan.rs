mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use giftbox_assistant::api::handlers::plan_handler;
use serde_json::json;

fn app() -> Router {
    Router::new()
        .route("/plan", post(plan_handler))
        .with_state(common::create_test_state())
}

#[tokio::test]
async fn test_plan_full_form() {
    let server = TestServer::new(app()).unwrap();

    let response = server
        .post("/plan")
        .json(&json!({
            "form": {
                "name": "Quà sinh nhật Lan",
                "preset": "Gấu bông",
                "occasion": "Sinh nhật",
                "shape": "cube",
                "dimensions": { "side": 60 }
            },
            "criteria": ["lid_base", "eco"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Quà sinh nhật Lan");
    assert_eq!(json["preset"], "Gấu bông");
    assert_eq!(json["occasion"], "Sinh nhật");
    assert_eq!(json["shape"], "cube");
    assert_eq!(json["shape_name"], "Hộp Lập Phương (Cube)");

    assert_eq!(json["cut_list"][0]["millimeters"], 60.0);
    assert_eq!(json["lid_list"][0]["millimeters"], 62.0);

    let references = json["references"].as_array().unwrap();
    assert_eq!(references.len(), 6);
    assert_eq!(references[0]["platform"], "google");
    assert_eq!(references[0]["name"], "Google");
    assert!(
        references[0]["url"]
            .as_str()
            .unwrap()
            .starts_with("https://www.google.com/search?q=cube%20box%20two%20piece")
    );

    assert_eq!(json["materials"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_plan_empty_request_uses_defaults() {
    let server = TestServer::new(app()).unwrap();

    let response = server.post("/plan").json(&json!({})).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shape"], "rectangular");
    assert_eq!(json["cut_list"].as_array().unwrap().len(), 3);
    assert!(json["lid_list"].is_null());
    assert_eq!(
        json["references"][0]["query"],
        "rectangular box dieline vector"
    );
}

#[tokio::test]
async fn test_plan_name_too_long() {
    let server = TestServer::new(app()).unwrap();

    let response = server
        .post("/plan")
        .json(&json!({ "form": { "name": "x".repeat(201) } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
