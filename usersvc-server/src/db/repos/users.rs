//! Postgres-backed user repository
//!
//! Handles user CRUD with one parameterized statement per call:
//! - update/insert: RETURNING, so the written row comes back in the same trip
//! - delete: affected-row count distinguishes a miss from a hit

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{DbError, UserStore};
use crate::models::{Pagination, User, UserId, UserName};

/// User record from database
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    id: i32,
    name: String,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id)
            .ok_or_else(|| DbError::InvalidRow(format!("non-positive user id {}", row.id)))?;
        Ok(Self { id, name: row.name })
    }
}

/// User repository
#[derive(Clone)]
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepo {
    async fn list(&self, page: Pagination) -> Result<Vec<User>, DbError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM users
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DbError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT id, name FROM users WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn insert(&self, name: &UserName) -> Result<User, DbError> {
        let row: UserRow =
            sqlx::query_as("INSERT INTO users (name) VALUES ($1) RETURNING id, name")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await?;

        User::try_from(row)
    }

    async fn update(&self, id: UserId, name: &UserName) -> Result<Option<User>, DbError> {
        let row: Option<UserRow> =
            sqlx::query_as("UPDATE users SET name = $1 WHERE id = $2 RETURNING id, name")
                .bind(name.as_str())
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    async fn delete(&self, id: UserId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
