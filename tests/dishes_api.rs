//! HTTP-level tests for the dish routes

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{Value, json};
use std::collections::HashSet;

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_dish() {
    let server = server();

    let response = server.post("/dishes").json(&data(valid_dish())).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Taco");
    assert_eq!(body["data"]["description"], "Spicy");
    assert_eq!(body["data"]["price"], 8);
    assert_eq!(body["data"]["image_url"], "http://x");
    assert!(!body["data"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_dish_ids_are_unique() {
    let server = server();
    let mut ids = HashSet::new();

    for _ in 0..5 {
        let body: Value = server.post("/dishes").json(&data(valid_dish())).await.json();
        ids.insert(body["data"]["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_create_dish_empty_description() {
    let server = server();

    let response = server
        .post("/dishes")
        .json(&data(with(valid_dish(), "description", json!(""))))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Dish must include a description");
}

#[tokio::test]
async fn test_create_dish_missing_each_field() {
    let server = server();

    for field in ["name", "description", "price", "image_url"] {
        let response = server
            .post("/dishes")
            .json(&data(without(valid_dish(), field)))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "MISSING_FIELD");
        assert_eq!(body["message"], format!("Dish must include a {field}"));
    }
}

#[tokio::test]
async fn test_create_dish_price_rules() {
    let server = server();

    for price in [json!(-1), json!("8"), json!([8])] {
        let response = server
            .post("/dishes")
            .json(&data(with(valid_dish(), "price", price)))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Dish must have a price that is an integer greater than 0"
        );
    }

    let response = server
        .post("/dishes")
        .json(&data(with(valid_dish(), "price", json!(2.5))))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["price"], 2.5);
}

#[tokio::test]
async fn test_create_dish_zero_price_counts_as_missing() {
    let server = server();

    let response = server
        .post("/dishes")
        .json(&data(with(valid_dish(), "price", json!(0))))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Dish must include a price");
}

#[tokio::test]
async fn test_create_dish_empty_body() {
    let server = server();

    let response = server.post("/dishes").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Dish must include a name");
}

#[tokio::test]
async fn test_create_dish_without_data_envelope() {
    let server = server();

    let response = server.post("/dishes").json(&valid_dish()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Dish must include a name");
}

#[tokio::test]
async fn test_create_dish_malformed_json() {
    let server = server();

    let response = server.post("/dishes").text("{\"data\": {").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_BODY");
}

// =============================================================================
// List / Read
// =============================================================================

#[tokio::test]
async fn test_list_dishes_in_insertion_order() {
    let server = server();
    server
        .post("/dishes")
        .json(&data(with(valid_dish(), "name", json!("First"))))
        .await;
    server
        .post("/dishes")
        .json(&data(with(valid_dish(), "name", json!("Second"))))
        .await;

    let response = server.get("/dishes").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_list_dishes_empty() {
    let body: Value = server().get("/dishes").await.json();
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn test_read_dish() {
    let server = seeded_server();

    let response = server.get("/dishes/d1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], "d1");
    assert_eq!(body["data"]["price"], 19);
}

#[tokio::test]
async fn test_read_unknown_dish() {
    let response = server().get("/dishes/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Dish id not found: nope");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_dish_then_read_returns_written_fields() {
    let server = seeded_server();
    let update = json!({
        "id": "d1",
        "name": "Century Eggs",
        "description": "Whole eggs preserved in clay and ash",
        "price": 17,
        "image_url": "https://images.example.com/eggs.jpg"
    });

    let response = server.put("/dishes/d1").json(&data(update.clone())).await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["data"], update);

    let reread: Value = server.get("/dishes/d1").await.json();
    assert_eq!(reread["data"], update);
}

#[tokio::test]
async fn test_update_dish_without_id_keeps_route_id() {
    let server = seeded_server();

    let response = server.put("/dishes/d1").json(&data(valid_dish())).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], "d1");
    assert_eq!(body["data"]["name"], "Taco");
}

#[tokio::test]
async fn test_update_dish_id_mismatch() {
    let server = seeded_server();

    let response = server
        .put("/dishes/d1")
        .json(&data(with(valid_dish(), "id", json!("d2"))))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "ID_MISMATCH");
    assert_eq!(
        body["message"],
        "Dish id does not match route id. Dish: d2, Route: d1"
    );
}

#[tokio::test]
async fn test_update_unknown_dish_is_checked_before_payload() {
    let server = server();

    let response = server.put("/dishes/ghost").json(&data(json!({}))).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Dish id not found: ghost");
}

#[tokio::test]
async fn test_failed_update_leaves_dish_unchanged() {
    let server = seeded_server();

    server
        .put("/dishes/d1")
        .json(&data(with(valid_dish(), "price", json!(-3))))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = server.get("/dishes/d1").await.json();
    assert_eq!(body["data"]["name"], "Dolcelatte and chickpea spaghetti");
    assert_eq!(body["data"]["price"], 19);
}

#[tokio::test]
async fn test_delete_dish_not_allowed() {
    let server = seeded_server();

    let response = server.delete("/dishes/d1").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json();
    assert_eq!(body["message"], "DELETE not allowed for /dishes/d1");

    server.get("/dishes/d1").await.assert_status_ok();
}
