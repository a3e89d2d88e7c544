//! User REST API handlers
//!
//! Writes answer with a plain-text `StatusMessage`. Reads answer with JSON;
//! a missing user is `{}`, while a failing store is a 500 `ApiError`.

use crate::{
    ApiResult, AppState, CreateUserRequest, ListUsersQuery, StatusMessage, UpdateUserRequest,
    UserDto, UserLookupResponse,
};

use demo_core::{NewUser, UserChanges, UserSearch};
use demo_db::UserRepository;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use log::{debug, error, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> StatusMessage {
    let new_user = NewUser::from(req);

    let repo = UserRepository::new(state.pool.clone());
    match repo.create(&new_user).await {
        Ok(id) => {
            info!("Created user {}", id);
            StatusMessage::Saved
        }
        Err(e) => {
            error!("Failed to save user: {}", e);
            StatusMessage::SaveFailed(e.detail())
        }
    }
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserLookupResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_by_id(id).await?;

    if user.is_none() {
        debug!("User {} not found", id);
    }

    Ok(Json(user.map(UserDto::from).into()))
}

/// GET /users?id=&name=&email=
///
/// All filters are optional and combine with AND.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let search = UserSearch::try_from(query)?;
    if search.is_unfiltered() {
        debug!("Listing all users");
    }

    let repo = UserRepository::new(state.pool.clone());
    let users = repo.search(&search).await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// PUT /users/{id}
///
/// Succeeds even when no row matched or nothing changed.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> StatusMessage {
    let changes = UserChanges::from(req);
    if changes.is_empty() {
        debug!("No fields to change for user {}", id);
    }

    let repo = UserRepository::new(state.pool.clone());
    match repo.update(id, &changes).await {
        Ok(matched) => {
            info!("Updated user {} ({} row(s) matched)", id, matched);
            StatusMessage::Updated
        }
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            StatusMessage::UpdateFailed
        }
    }
}

/// DELETE /users/{id}
///
/// Deleting an id that does not exist is reported as success.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> StatusMessage {
    let repo = UserRepository::new(state.pool.clone());
    match repo.delete(id).await {
        Ok(deleted) => {
            info!("Deleted user {} ({} row(s) removed)", id, deleted);
            StatusMessage::Deleted
        }
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            StatusMessage::DeleteFailed
        }
    }
}
