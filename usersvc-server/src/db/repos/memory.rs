//! In-process user store
//!
//! Mirrors the Postgres repository's semantics (ascending ids, never
//! reused) without a database. Used by tests and local experiments.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, UserStore};
use crate::models::{Pagination, User, UserId, UserName};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<UserId, String>,
    last_id: i32,
}

/// User store backed by an ordered map
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self, page: Pagination) -> Result<Vec<User>, DbError> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(id, name)| User {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).map(|name| User {
            id,
            name: name.clone(),
        }))
    }

    async fn insert(&self, name: &UserName) -> Result<User, DbError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .and_then(UserId::new)
            .ok_or_else(|| DbError::Unavailable("user id sequence exhausted".into()))?;

        inner.last_id = id.get();
        inner.rows.insert(id, name.as_str().to_owned());

        Ok(User {
            id,
            name: name.as_str().to_owned(),
        })
    }

    async fn update(&self, id: UserId, name: &UserName) -> Result<Option<User>, DbError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|stored| {
            *stored = name.as_str().to_owned();
            User {
                id,
                name: stored.clone(),
            }
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, DbError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
