//! Store abstraction and its implementations
//!
//! Every method issues exactly one statement. Absence is reported as
//! `None`/`false`, never as an error, so callers decide what "not found"
//! means for their operation.

use async_trait::async_trait;

use crate::models::{Pagination, User, UserId, UserName};

pub mod memory;
pub mod users;

pub use memory::MemoryUserStore;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("invalid row: {0}")]
    InvalidRow(String),
}

/// Persistence operations for the `users` table
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Rows in ascending id order, windowed by `page`.
    async fn list(&self, page: Pagination) -> Result<Vec<User>, DbError>;

    /// Primary-key lookup.
    async fn get(&self, id: UserId) -> Result<Option<User>, DbError>;

    /// Insert a row and return it with its generated id.
    async fn insert(&self, name: &UserName) -> Result<User, DbError>;

    /// Overwrite `name`; `None` when no row has `id`.
    async fn update(&self, id: UserId, name: &UserName) -> Result<Option<User>, DbError>;

    /// Remove the row; `false` when no row had `id`.
    async fn delete(&self, id: UserId) -> Result<bool, DbError>;

    /// Round-trip to the store without touching data.
    async fn ping(&self) -> Result<(), DbError>;
}
