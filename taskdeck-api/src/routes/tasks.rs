/// Task endpoints
///
/// # Endpoints
///
/// - `POST /users/:user_id/tasks` - Create task for a user
/// - `GET /users/:user_id/tasks` - List a user's tasks
/// - `GET /tasks` - List all tasks
/// - `PATCH /tasks/:task_id` - Partially update a task
/// - `DELETE /tasks/:task_id` - Delete a task

use super::{parse_task_id, parse_user_id, DeleteResponse};
use crate::{
    app::AppState,
    error::{ApiResult, ValidatedJson},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use taskdeck_shared::models::{CreateTask, Task, UpdateTask};

/// Create a task for a user
///
/// The new task starts with `completed = false`. Fails if the user does not
/// exist.
#[utoipa::path(
    post,
    path = "/users/{user_id}/tasks",
    tag = "tasks",
    params(
        ("user_id" = String, Path, description = "Owning user ID")
    ),
    request_body(
        content = inline(CreateTask),
        description = "Task to create",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Request body does not match the schema", body = ErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let user_id = parse_user_id(&user_id)?;

    let task = state.store.write().await.insert_task(user_id, req)?;

    tracing::info!(task_id = %task.id, user_id = %user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// List tasks owned by a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/tasks",
    tag = "tasks",
    params(
        ("user_id" = String, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "The user's tasks", body = [Task]),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Task>>> {
    let user_id = parse_user_id(&user_id)?;

    let tasks = state.store.read().await.tasks_for_user(user_id)?;

    Ok(Json(tasks))
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "Every task, regardless of owner", body = [Task])
    )
)]
pub async fn get_all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks: Vec<Task> = state.store.read().await.tasks().cloned().collect();

    tracing::debug!(count = tasks.len(), "Listed all tasks");

    Ok(Json(tasks))
}

/// Update a task
///
/// Only the fields present in the body are changed; the rest keep their
/// current values.
#[utoipa::path(
    patch,
    path = "/tasks/{task_id}",
    tag = "tasks",
    params(
        ("task_id" = String, Path, description = "Task ID")
    ),
    request_body(
        content = inline(UpdateTask),
        description = "Fields to change",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 422, description = "Request body does not match the schema", body = ErrorResponse)
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateTask>,
) -> ApiResult<Json<Task>> {
    let id = parse_task_id(&task_id)?;

    let task = state.store.write().await.update_task(id, req)?;

    tracing::info!(task_id = %task.id, completed = task.completed, "Task updated");

    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{task_id}",
    tag = "tasks",
    params(
        ("task_id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let id = parse_task_id(&task_id)?;

    let task = state.store.write().await.remove_task(id)?;

    tracing::info!(task_id = %task.id, "Task deleted");

    Ok(Json(DeleteResponse::deleted(task.id)))
}
