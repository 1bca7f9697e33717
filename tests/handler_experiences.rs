mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::TEST_ADMIN_TOKEN;

fn valid_entry() -> Value {
    json!({
        "id": "e1",
        "title": "Engineer",
        "company_name": "Acme",
        "image_url": "https://example.com/acme.png",
        "start_month": "2023-04",
        "end_month": "",
        "description": "Built things"
    })
}

#[tokio::test]
async fn test_create_accepts_empty_end_month() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    let response = server
        .post("/resume")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&valid_entry())
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], "e1");
    assert_eq!(body["message"], "Resume item created successfully");
}

#[tokio::test]
async fn test_create_rejects_missing_end_month() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    let mut entry = valid_entry();
    entry.as_object_mut().unwrap().remove("end_month");

    let response = server
        .post("/resume")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&entry)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Validation error: Missing required field: end_month");
}

#[tokio::test]
async fn test_create_duplicate_id_conflicts() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    server
        .post("/resume")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&valid_entry())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/resume")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&valid_entry())
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Resume item with id 'e1' already exists");
}

#[tokio::test]
async fn test_list_sorted_newest_first() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    for (id, start) in [("a", "2021-01"), ("b", "2024-06"), ("c", "2022-09")] {
        let mut entry = valid_entry();
        entry["id"] = json!(id);
        entry["start_month"] = json!(start);
        server
            .post("/resume")
            .add_header("x-admin-token", TEST_ADMIN_TOKEN)
            .json(&entry)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = server.get("/resume").await.json();

    assert_eq!(body["count"], 3);
    let ids: Vec<&str> = body["experiences"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[tokio::test]
async fn test_update_end_month_marks_position_closed() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    server
        .post("/resume")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&valid_entry())
        .await
        .assert_status(StatusCode::CREATED);

    let updated: Value = server
        .put("/resume/e1")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .json(&json!({"end_month": "2025-07"}))
        .await
        .json();

    assert_eq!(updated["end_month"], "2025-07");
    assert_eq!(updated["company_name"], "Acme");
    assert!(updated["updated_at"].is_string());
}

#[tokio::test]
async fn test_get_and_delete_not_found() {
    let ctx = common::create_test_context();
    let server = common::make_server(ctx.state.clone());

    let response = server.get("/resume/missing").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Experience entry not found");

    server
        .delete("/resume/missing")
        .add_header("x-admin-token", TEST_ADMIN_TOKEN)
        .await
        .assert_status_not_found();
}
