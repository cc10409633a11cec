//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{PaginationParams, User, UserPayload};

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.get(),
            name: u.name,
        }
    }
}

/// GET /api/users - one page of users
async fn list_users(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list(&params).await.map_err(|e| state.reject(e))?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.create(&payload).await.map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.get(&id).await.map_err(|e| state.reject(e))?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id} - replace a user's name
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidJson(payload): ValidJson<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .update(&id, &payload)
        .await
        .map_err(|e| state.reject(e))?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(&id).await.map_err(|e| state.reject(e))?;
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
