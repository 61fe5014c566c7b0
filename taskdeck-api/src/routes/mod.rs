/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: User creation, search, lookup and cascade delete
/// - `tasks`: Task creation, listing, partial update and delete
///
/// Identifiers arrive as opaque strings. A path ID that is not a valid UUID
/// cannot name a stored record, so it is reported as 404 like any other
/// unknown ID.

pub mod health;
pub mod tasks;
pub mod users;

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Confirmation returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    /// Always `"deleted"`
    #[schema(example = "deleted")]
    pub status: String,

    /// ID of the removed record
    pub id: Uuid,
}

impl DeleteResponse {
    pub fn deleted(id: Uuid) -> Self {
        Self {
            status: "deleted".to_string(),
            id,
        }
    }
}

pub(crate) fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("User not found".to_string()))
}

pub(crate) fn parse_task_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound("Task not found".to_string()))
}
