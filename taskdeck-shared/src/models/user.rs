/// User model
///
/// Users are created by name, never updated, and own zero or more tasks.
/// Deleting a user removes every task it owns (see [`crate::store::Store::remove_user`]).
///
/// # Example
///
/// ```
/// use taskdeck_shared::models::user::{CreateUser, User};
///
/// let user = User::new(CreateUser {
///     name: "Alice".to_string(),
/// });
///
/// assert!(user.name_contains("ali"));
/// assert!(!user.name_contains("bob"));
/// ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user ID (UUID v4, generated on creation)
    pub id: Uuid,

    /// Display name
    #[schema(example = "Alice")]
    pub name: String,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    /// Display name of the new user
    #[schema(example = "Alice")]
    pub name: String,
}

impl User {
    /// Builds a user with a freshly generated ID
    pub fn new(data: CreateUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
        }
    }

    /// Case-insensitive substring match on the name
    ///
    /// An empty needle matches every user.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
