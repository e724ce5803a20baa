/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use roster_core::{NewUser, User, UserId, UserPatch};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/v1/users
/// List all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    let users = app_state.store.list();
    tracing::debug!(count = users.len(), "listed users");
    Json(users)
}

/// GET /api/v1/users/:id
/// Get a single user
pub async fn get_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let Path(id) = path?;
    let id: UserId = id.parse()?;
    let user = app_state.store.find_by_id(id)?;
    Ok(Json(user))
}

/// POST /api/v1/users
/// Create a user from `{name, email}`
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(req) = payload?;
    let user = app_state.store.insert(req)?;

    tracing::info!(id = %user.id, "created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/users/:id
/// Replace the supplied fields of a user
pub async fn update_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>> {
    let Path(id) = path?;
    let id: UserId = id.parse()?;
    let Json(patch) = payload?;
    let user = app_state.store.update_partial(id, patch)?;

    tracing::info!(id = %user.id, "updated user");
    Ok(Json(user))
}

/// DELETE /api/v1/users/:id
/// Delete a user
pub async fn delete_user(
    path: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = path?;
    let id: UserId = id.parse()?;
    app_state.store.delete(id)?;

    tracing::info!(id = %id, "deleted user");
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
