//! Route handlers organized by resource

pub mod health;
pub mod users;

use super::error::ApiError;

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound {
        message: "Not found".into(),
    }
}
