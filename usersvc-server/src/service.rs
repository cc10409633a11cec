//! User record service
//!
//! Validates raw request input, runs one store call per operation, and
//! translates every outcome into [`ServiceError`]. Validation always
//! finishes before the store is touched.

use std::sync::Arc;

use crate::db::repos::{DbError, UserStore};
use crate::models::{
    Pagination, PaginationParams, User, UserId, UserName, UserPayload, ValidationError, Violations,
};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure taxonomy for user operations
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed id or pagination value
    #[error("invalid argument: {0}")]
    InvalidArgument(ValidationError),

    /// One or more body/id rules failed; nothing was written
    #[error("validation failed: {0}")]
    ValidationFailed(Violations),

    #[error("user {0} not found")]
    NotFound(UserId),

    /// Any failure from the persistence layer
    #[error("{context}: {source}")]
    StoreUnavailable {
        context: &'static str,
        #[source]
        source: DbError,
    },
}

fn store_error(context: &'static str) -> impl FnOnce(DbError) -> ServiceError {
    move |source| ServiceError::StoreUnavailable { context, source }
}

/// CRUD over the `users` table
#[derive(Clone)]
pub struct UserRecordService {
    store: Arc<dyn UserStore>,
}

impl UserRecordService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// One page of users in ascending id order.
    pub async fn list(&self, params: &PaginationParams) -> ServiceResult<Vec<User>> {
        let page = Pagination::parse(params).map_err(ServiceError::InvalidArgument)?;

        let users = self
            .store
            .list(page)
            .await
            .map_err(store_error("Error fetching users"))?;

        tracing::debug!(page = page.page, limit = page.limit, count = users.len(), "Listed users");
        Ok(users)
    }

    pub async fn get(&self, raw_id: &str) -> ServiceResult<User> {
        let id = UserId::parse(raw_id).map_err(ServiceError::InvalidArgument)?;

        self.store
            .get(id)
            .await
            .map_err(store_error("Error fetching user"))?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn create(&self, payload: &UserPayload) -> ServiceResult<User> {
        let name =
            UserName::from_json(payload.name.as_ref()).map_err(ServiceError::ValidationFailed)?;

        let user = self
            .store
            .insert(&name)
            .await
            .map_err(store_error("Error creating user"))?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Replace the name of an existing user.
    ///
    /// Id and body are both validated; their violations are reported together.
    pub async fn update(&self, raw_id: &str, payload: &UserPayload) -> ServiceResult<User> {
        let (id, name) = match (
            UserId::parse(raw_id),
            UserName::from_json(payload.name.as_ref()),
        ) {
            (Ok(id), Ok(name)) => (id, name),
            (id, name) => {
                let mut violations = Violations::new();
                if let Err(err) = id {
                    violations.push(err);
                }
                if let Err(errs) = name {
                    violations.extend(errs);
                }
                return Err(ServiceError::ValidationFailed(violations));
            }
        };

        let user = self
            .store
            .update(id, &name)
            .await
            .map_err(store_error("Error updating user"))?
            .ok_or(ServiceError::NotFound(id))?;

        tracing::info!(user_id = %id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, raw_id: &str) -> ServiceResult<()> {
        let id = UserId::parse(raw_id).map_err(ServiceError::InvalidArgument)?;

        let existed = self
            .store
            .delete(id)
            .await
            .map_err(store_error("Error deleting user"))?;

        if !existed {
            return Err(ServiceError::NotFound(id));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Check that the store answers.
    pub async fn ping(&self) -> ServiceResult<()> {
        self.store
            .ping()
            .await
            .map_err(store_error("Error reaching store"))
    }
}
