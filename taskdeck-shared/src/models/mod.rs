/// Domain models for Taskdeck
///
/// # Models
///
/// - `user`: Users, identified by a generated UUID
/// - `task`: Tasks owned by a user, with partial-update support
///
/// Models derive `utoipa::ToSchema` so the API server can publish them in its
/// OpenAPI document.

pub mod task;
pub mod user;

pub use task::{CreateTask, Task, UpdateTask};
pub use user::{CreateUser, User};
