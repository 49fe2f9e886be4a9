mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/user")
        .json(&json!({"Name": "A", "Email": "a@x.com", "Age": 1}))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.header("location"), "/users/1");

    let body = response.json::<Value>();
    assert_eq!(body, json!({"ID": 1, "Name": "A", "Email": "a@x.com", "Age": 1}));
    assert_eq!(common::count_users(&pool).await, 1);
}

#[tokio::test]
async fn test_create_user_location_matches_body() {
    let pool = common::create_test_pool().await;
    common::create_test_user(&pool, "First", "first@x.com", 20).await;
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .json(&json!({"Name": "Josset", "Email": "isset.josset@gmail.com", "Age": 26}))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    let id = body["ID"].as_i64().unwrap();
    assert_eq!(id, 2);
    assert_eq!(response.header("location"), format!("/users/{id}").as_str());
}

#[tokio::test]
async fn test_create_user_ignores_client_id() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .json(&json!({"ID": 500, "Name": "A", "Email": "a@x.com", "Age": 1}))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["ID"], 1);
}

#[tokio::test]
async fn test_create_user_without_content_type() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .text(r#"{"Name": "Plain", "Email": "p@x.com", "Age": 5}"#)
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["Name"], "Plain");
}

#[tokio::test]
async fn test_create_user_missing_fields_default() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .json(&json!({"Name": "OnlyName", "Unknown": true}))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["Name"], "OnlyName");
    assert_eq!(body["Email"], "");
    assert_eq!(body["Age"], 0);
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool.clone());

    let response = server.post("/user").text(r#""{ID": 1234, {}"#).await;

    response.assert_status_bad_request();
    assert!(response.as_bytes().is_empty());
    assert_eq!(common::count_users(&pool).await, 0);
}

#[tokio::test]
async fn test_create_user_wrong_field_type_defaults() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/user")
        .json(&json!({"Name": "A", "Email": "a@x.com", "Age": "x"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({"ID": 1, "Name": "A", "Email": "a@x.com", "Age": 0})
    );
    assert_eq!(common::count_users(&pool).await, 1);
}

#[tokio::test]
async fn test_create_user_fractional_age_defaults() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.post("/user").text(r#"{"Name":"A","Age":1.5}"#).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["Name"], "A");
    assert_eq!(body["Age"], 0);
}

#[tokio::test]
async fn test_create_user_well_formed_non_object_bodies() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool.clone());

    for body in ["null", "[]", "7"] {
        let response = server.post("/user").text(body).await;

        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Value>();
        assert_eq!(created["Name"], "");
        assert_eq!(created["Age"], 0);
    }

    assert_eq!(common::count_users(&pool).await, 3);
}

#[tokio::test]
async fn test_create_user_duplicate_id_keys_accepted() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .post("/user")
        .text(r#"{"ID":1,"id":2,"Name":"A"}"#)
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["Name"], "A");
}

#[tokio::test]
async fn test_create_user_wrong_method() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.get("/user").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.as_bytes().is_empty());
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_empty_array() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_users_after_two_inserts() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    for name in ["Josset", "Joseto"] {
        server
            .post("/user")
            .json(&json!({"Name": name, "Email": "j@x.com", "Age": 26}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/users").await;

    response.assert_status_ok();
    let items = response.json::<Vec<Value>>();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|u| u.get("ID").is_some()));
}

#[tokio::test]
async fn test_list_users_wrong_method() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.put("/users").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// ─── FETCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_user_success() {
    let pool = common::create_test_pool().await;
    let id = common::create_test_user(&pool, "Ada", "ada@example.com", 36).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/users/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"ID": id, "Name": "Ada", "Email": "ada@example.com", "Age": 36})
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    server.get("/users/999").await.assert_status_not_found();
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    server.get("/users/abc").await.assert_status_bad_request();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_user_success() {
    let pool = common::create_test_pool().await;
    let id = common::create_test_user(&pool, "Josset", "isset.josset@gmail.com", 26).await;
    let server = common::make_server(pool);

    let response = server
        .put("/user/update")
        .json(&json!({"ID": id, "Name": "Joseto", "Email": "josset.isset@hotmail.com", "Age": 30}))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["ID"], id);
    assert_eq!(body["Name"], "Joseto");
    assert_eq!(body["Email"], "josset.isset@hotmail.com");
    assert_eq!(body["Age"], 30);

    let stored = server.get(&format!("/users/{id}")).await.json::<Value>();
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let pool = common::create_test_pool().await;
    let id = common::create_test_user(&pool, "Josset", "isset.josset@gmail.com", 26).await;
    let server = common::make_server(pool);

    let response = server
        .put("/user/update")
        .json(&json!({"ID": 14, "Name": "Josetqqweip", "Email": "josset.isset@hotmail.com", "Age": 25}))
        .await;

    response.assert_status_not_found();
    assert!(response.as_bytes().is_empty());

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["ID"], id);
    assert_eq!(users[0]["Name"], "Josset");
}

#[tokio::test]
async fn test_update_user_malformed_json() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .put("/user/update")
        .text(r#"{"ID": 1,"Nae": "Joseto", "Email: "josset.isset@hotmail.com", "Age" 30}"#)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_update_user_wrong_field_type_defaults() {
    let pool = common::create_test_pool().await;
    let id = common::create_test_user(&pool, "Josset", "j@x.com", 26).await;
    let server = common::make_server(pool);

    let response = server
        .put("/user/update")
        .json(&json!({"ID": id, "Name": "Renamed", "Email": "j@x.com", "Age": "old"}))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"ID": id, "Name": "Renamed", "Email": "j@x.com", "Age": 0})
    );
}

#[tokio::test]
async fn test_update_user_wrong_method() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server
        .post("/user/update")
        .json(&json!({"ID": 1, "Name": "A"}))
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user_twice() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool.clone());

    server
        .post("/user")
        .json(&json!({"Name": "A", "Email": "a@x.com", "Age": 1}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete("/user/delete/1").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
    assert_eq!(common::count_users(&pool).await, 0);

    server
        .delete("/user/delete/1")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_user_removes_only_target() {
    let pool = common::create_test_pool().await;
    let keep = common::create_test_user(&pool, "Keep", "keep@x.com", 1).await;
    let gone = common::create_test_user(&pool, "Gone", "gone@x.com", 2).await;
    let server = common::make_server(pool);

    server
        .delete(&format!("/user/delete/{gone}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["ID"], keep);
}

#[tokio::test]
async fn test_delete_user_invalid_id() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.delete("/user/delete/notValidID").await;

    response.assert_status_bad_request();
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_delete_user_empty_id() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.delete("/user/delete/").await;

    response.assert_status_bad_request();
    assert!(response.as_bytes().is_empty());

    server
        .get("/user/delete/")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_user_extra_segments() {
    let pool = common::create_test_pool().await;
    common::create_test_user(&pool, "Keep", "keep@x.com", 1).await;
    let server = common::make_server(pool.clone());

    server
        .delete("/user/delete/1/2")
        .await
        .assert_status_bad_request();
    server
        .get("/user/delete/1/2")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(common::count_users(&pool).await, 1);
}

#[tokio::test]
async fn test_delete_user_wrong_method_checked_before_id() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let response = server.get("/user/delete/notValidID").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cors_header_on_every_response() {
    let pool = common::create_test_pool().await;
    let server = common::make_server(pool);

    let responses = vec![
        server.get("/users").await,
        server
            .post("/user")
            .json(&json!({"Name": "A", "Email": "a@x.com", "Age": 1}))
            .await,
        server.post("/user").text("not json").await,
        server.method(Method::PATCH, "/users").await,
        server.delete("/user/delete/42").await,
        server.get("/").await,
    ];

    for response in responses {
        assert_eq!(
            response.header("access-control-allow-origin"),
            "*",
            "missing CORS header on {}",
            response.status_code()
        );
    }
}

// ─── IN-MEMORY BACKEND ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_memory_backend_full_lifecycle() {
    let server = common::make_memory_server();

    server.get("/users").await.assert_json(&json!([]));

    let created = server
        .post("/user")
        .json(&json!({"Name": "A", "Email": "a@x.com", "Age": 1}))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.header("location"), "/users/1");

    server
        .put("/user/update")
        .json(&json!({"ID": 1, "Name": "B", "Email": "b@x.com", "Age": 2}))
        .await
        .assert_json(&json!({"ID": 1, "Name": "B", "Email": "b@x.com", "Age": 2}));

    server
        .delete("/user/delete/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete("/user/delete/1")
        .await
        .assert_status_not_found();
}
