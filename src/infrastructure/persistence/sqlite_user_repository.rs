//! SQLite implementation of the user repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.name, r.email, r.age)
    }
}

/// SQLite repository for users.
///
/// Every statement is parameterized with `?` placeholders; no value is ever
/// interpolated into SQL text.
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query("INSERT INTO users (name, email, age) VALUES (?, ?, ?)")
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(new_user.age)
            .execute(self.pool.as_ref())
            .await?;

        Ok(new_user.with_id(result.last_insert_rowid()))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, email, age FROM users")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, age FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn update_by_id(&self, user: User) -> Result<Option<User>, AppError> {
        let result = sqlx::query("UPDATE users SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(user.id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 1 {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
