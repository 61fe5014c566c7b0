/// User endpoints
///
/// # Endpoints
///
/// - `POST /users` - Create user
/// - `GET /users?name=` - List or search users
/// - `GET /users/:user_id` - Get user
/// - `DELETE /users/:user_id` - Delete user and their tasks

use super::{parse_user_id, DeleteResponse};
use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidatedJson},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskdeck_shared::models::{CreateUser, User};
use utoipa::IntoParams;

/// Query parameters for user search
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchUsersQuery {
    /// Case-insensitive substring of the user name
    pub name: Option<String>,
}

/// Create a user
///
/// Generates an ID for the new user and returns the stored record.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(
        content = inline(CreateUser),
        description = "User to create",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 422, description = "Request body does not match the schema", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.store.write().await.insert_user(req);

    tracing::info!(user_id = %user.id, name = %user.name, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// List or search users
///
/// Without `name`, returns every user. With `name`, returns users whose name
/// contains it, ignoring case. Results are in creation order.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(SearchUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = [User])
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> ApiResult<Json<Vec<User>>> {
    let users = state.store.read().await.search_users(query.name.as_deref());

    tracing::debug!(filter = ?query.name, matches = users.len(), "Searched users");

    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_user_id(&user_id)?;

    let user = state
        .store
        .read()
        .await
        .user(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user
///
/// Also deletes every task owned by the user.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeleteResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_user_id(&user_id)?;

    let (user, tasks) = state.store.write().await.remove_user(id)?;

    tracing::info!(
        user_id = %user.id,
        cascaded_tasks = tasks.len(),
        "User deleted"
    );

    Ok(Json(DeleteResponse::deleted(user.id)))
}
