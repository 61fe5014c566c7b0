/// Task model
///
/// Tasks always belong to a user and start out incomplete. Title, description
/// and completion flag can be changed later through a partial update.
///
/// # Example
///
/// ```
/// use taskdeck_shared::models::task::{CreateTask, Task, UpdateTask};
/// use uuid::Uuid;
///
/// let mut task = Task::new(Uuid::new_v4(), CreateTask {
///     title: "Buy milk".to_string(),
///     description: None,
/// });
/// assert!(!task.completed);
///
/// task.apply(UpdateTask {
///     completed: Some(true),
///     ..Default::default()
/// });
/// assert!(task.completed);
/// assert_eq!(task.title, "Buy milk");
/// ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique task ID (UUID v4, generated on creation)
    pub id: Uuid,

    /// Short task title
    #[schema(example = "Buy milk")]
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Owning user
    pub user_id: Uuid,

    /// Whether the task is done
    pub completed: bool,
}

/// Input for creating a new task
///
/// The owner is taken from the request path, so any `user_id` sent in the
/// body is ignored along with other unknown fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTask {
    /// Task title
    #[schema(example = "Buy milk")]
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Input for updating a task
///
/// All fields are optional. Only non-None fields are applied; a `null`
/// description is treated the same as an absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTask {
    /// New title
    #[serde(default)]
    pub title: Option<String>,

    /// New description
    #[serde(default)]
    pub description: Option<String>,

    /// New completion flag
    #[serde(default)]
    pub completed: Option<bool>,
}

impl Task {
    /// Builds an incomplete task owned by `user_id` with a fresh ID
    pub fn new(user_id: Uuid, data: CreateTask) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            user_id,
            completed: false,
        }
    }

    /// Applies a partial update in place
    pub fn apply(&mut self, data: UpdateTask) {
        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(description) = data.description {
            self.description = Some(description);
        }
        if let Some(completed) = data.completed {
            self.completed = completed;
        }
    }
}
