/**
 * Contact Routes
 * Public message submission plus the admin-only inbox
 */
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::db::models::ContactMessage;
use crate::db::{decode_id, encode_id};
use crate::error::ApiError;
use crate::routes::{require_non_empty, DeleteResponse};
use crate::state::AppState;

lazy_static::lazy_static! {
    /// One non-space local part, an @, a domain with at least one dot.
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateContactMessageRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactMessageResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(msg: ContactMessage) -> Self {
        Self {
            id: msg.id.map(|oid| encode_id(&oid)).unwrap_or_default(),
            name: msg.name,
            email: msg.email,
            subject: msg.subject,
            message: msg.message,
            date: msg.date.to_chrono(),
            read: msg.read,
        }
    }
}

impl CreateContactMessageRequest {
    /// New messages arrive unread with a server-side timestamp.
    fn into_document(self) -> ContactMessage {
        ContactMessage {
            id: None,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            date: mongodb::bson::DateTime::now(),
            read: false,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/contact - Accept a message from the public site.
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactMessageRequest>,
) -> Result<Json<ContactMessageResponse>, ApiError> {
    require_non_empty(&[
        ("Name", &payload.name),
        ("Email", &payload.email),
        ("Subject", &payload.subject),
        ("Message", &payload.message),
    ])?;

    if !is_valid_email(&payload.email) {
        return Err(ApiError::validation("Invalid email address"));
    }

    let document = payload.into_document();

    let inserted = state
        .store
        .contact_messages()
        .insert_one(&document)
        .await
        .map_err(|e| ApiError::internal("Error sending message", e))?;

    let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
        ApiError::internal("Error sending message", "inserted id was not an ObjectId")
    })?;

    let message = state
        .store
        .contact_messages()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error sending message", e))?
        .ok_or_else(|| {
            ApiError::internal("Error sending message", "created message missing on readback")
        })?;

    Ok(Json(message.into()))
}

/// GET /api/contact/messages - List received messages, newest first
/// (admin only).
pub async fn list_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactMessageResponse>>, ApiError> {
    state.guard.authorize(&headers)?;

    let messages: Vec<ContactMessage> = state
        .store
        .contact_messages()
        .find(doc! {})
        .sort(doc! { "date": -1 })
        .await
        .map_err(|e| ApiError::internal("Error fetching messages", e))?
        .try_collect()
        .await
        .map_err(|e| ApiError::internal("Error fetching messages", e))?;

    Ok(Json(
        messages
            .into_iter()
            .map(ContactMessageResponse::from)
            .collect(),
    ))
}

/// DELETE /api/contact/messages/{id} - Delete a message (admin only).
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.guard.authorize(&headers)?;

    let oid = decode_id(&id, "message")?;

    let result = state
        .store
        .contact_messages()
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error deleting message", e))?;

    if result.deleted_count == 0 {
        return Err(ApiError::not_found("Message not found"));
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Message deleted successfully".to_string(),
    }))
}

// ============================================================================
// Tests
// ============================================================================
