/// OpenAPI document for the API
///
/// The document is generated from the `#[utoipa::path]` annotations on the
/// route handlers and served at `GET /openapi.json`, so tool loaders can turn
/// each operation into a callable tool. Operation IDs are the handler names.
///
/// Request bodies are inlined rather than referenced through
/// `components/schemas`, because some loaders skip bodies that contain
/// unresolved `$ref`s.

use crate::{
    error::{ErrorResponse, ValidationErrorDetail},
    routes::{self, DeleteResponse},
};
use axum::Json;
use taskdeck_shared::models::{CreateTask, CreateUser, Task, UpdateTask, User};
use utoipa::OpenApi;

/// API documentation root
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskdeck Test API",
        version = "1.0.0",
        description = "In-memory users and tasks backend for exercising OpenAPI tool loaders"
    ),
    paths(
        routes::users::create_user,
        routes::users::search_users,
        routes::users::get_user,
        routes::users::delete_user,
        routes::tasks::create_task,
        routes::tasks::get_tasks_by_user,
        routes::tasks::get_all_tasks,
        routes::tasks::update_task,
        routes::tasks::delete_task,
    ),
    components(schemas(
        User,
        Task,
        CreateUser,
        CreateTask,
        UpdateTask,
        DeleteResponse,
        ErrorResponse,
        ValidationErrorDetail,
    )),
    tags(
        (name = "users", description = "User management"),
        (name = "tasks", description = "Tasks owned by users")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
