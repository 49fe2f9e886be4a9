#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use userfy::infrastructure::persistence::database;
use userfy::infrastructure::persistence::{MemoryUserRepository, SqliteUserRepository};
use userfy::routes::app_router;
use userfy::state::AppState;

pub async fn create_test_pool() -> SqlitePool {
    let pool = database::connect_in_memory().await.unwrap();
    database::ensure_schema(&pool).await.unwrap();
    pool
}

pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str, age: i64) -> i64 {
    sqlx::query("INSERT INTO users (name, email, age) VALUES (?, ?, ?)")
        .bind(name)
        .bind(email)
        .bind(age)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(SqliteUserRepository::new(Arc::new(pool))))
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

pub fn make_memory_server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryUserRepository::new()));
    TestServer::new(app_router(state)).unwrap()
}
