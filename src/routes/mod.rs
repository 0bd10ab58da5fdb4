/**
 * Routes Module
 * API route handlers
 */

pub mod auth;
pub mod blog;
pub mod contact;
pub mod health;
pub mod projects;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Body returned by every delete endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Reject blank required fields. `fields` pairs a display name with the
/// submitted value; the first blank one produces the error.
pub(crate) fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ApiError::validation(format!("{name} is required")));
        }
    }
    Ok(())
}
