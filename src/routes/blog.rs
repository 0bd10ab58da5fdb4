/**
 * Blog Routes
 * CRUD endpoints backed by the blog_posts collection
 */
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::db::models::BlogPost;
use crate::db::{decode_id, encode_id};
use crate::error::ApiError;
use crate::routes::{require_non_empty, DeleteResponse};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default = "default_read_time")]
    pub read_time: String,
}

fn default_read_time() -> String {
    "5 min".to_string()
}

/// Every field optional. `author` and `date` are server-owned and cannot be
/// rewritten after creation.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub category: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.map(|oid| encode_id(&oid)).unwrap_or_default(),
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            image: post.image,
            author: post.author,
            date: post.date.to_chrono(),
            category: post.category,
            read_time: post.read_time,
            tags: post.tags,
        }
    }
}

impl CreateBlogPostRequest {
    /// Build the document to insert. `author` and `date` are stamped by the
    /// server, never taken from the client.
    fn into_document(self, author: &str) -> BlogPost {
        BlogPost {
            id: None,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image,
            author: author.to_string(),
            date: mongodb::bson::DateTime::now(),
            category: self.category,
            read_time: self.read_time,
            tags: self.tags,
        }
    }
}

impl UpdateBlogPostRequest {
    /// Collect submitted fields into a `$set` document. An update that sets
    /// nothing is a validation error, not a silent no-op.
    fn into_update_document(self) -> Result<Document, ApiError> {
        let mut set = Document::new();

        if let Some(title) = self.title {
            set.insert("title", title);
        }
        if let Some(excerpt) = self.excerpt {
            set.insert("excerpt", excerpt);
        }
        if let Some(content) = self.content {
            set.insert("content", content);
        }
        if let Some(image) = self.image {
            set.insert("image", image);
        }
        if let Some(category) = self.category {
            set.insert("category", category);
        }
        if let Some(tags) = self.tags {
            set.insert("tags", tags);
        }
        if let Some(read_time) = self.read_time {
            set.insert("readTime", read_time);
        }

        if set.is_empty() {
            return Err(ApiError::validation("No data to update"));
        }

        Ok(set)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/blog/posts - List all posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPostResponse>>, ApiError> {
    let posts: Vec<BlogPost> = state
        .store
        .blog_posts()
        .find(doc! {})
        .sort(doc! { "date": -1 })
        .await
        .map_err(|e| ApiError::internal("Error fetching blog posts", e))?
        .try_collect()
        .await
        .map_err(|e| ApiError::internal("Error fetching blog posts", e))?;

    Ok(Json(posts.into_iter().map(BlogPostResponse::from).collect()))
}

/// GET /api/blog/posts/{id} - Fetch a single post.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPostResponse>, ApiError> {
    let oid = decode_id(&id, "post")?;

    let post = state
        .store
        .blog_posts()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error fetching blog post", e))?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(Json(post.into()))
}

/// POST /api/blog/posts - Create a post (admin only).
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBlogPostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.guard.authorize(&headers)?;

    require_non_empty(&[
        ("Title", &payload.title),
        ("Excerpt", &payload.excerpt),
        ("Content", &payload.content),
        ("Image", &payload.image),
        ("Category", &payload.category),
    ])?;

    let document = payload.into_document(&state.blog_author);

    let inserted = state
        .store
        .blog_posts()
        .insert_one(&document)
        .await
        .map_err(|e| ApiError::internal("Error creating blog post", e))?;

    let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
        ApiError::internal("Error creating blog post", "inserted id was not an ObjectId")
    })?;

    // Read the document back so the response reflects exactly what was stored.
    let post = state
        .store
        .blog_posts()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error creating blog post", e))?
        .ok_or_else(|| {
            ApiError::internal("Error creating blog post", "created post missing on readback")
        })?;

    Ok((StatusCode::CREATED, Json(BlogPostResponse::from(post))))
}

/// PUT /api/blog/posts/{id} - Partial update (admin only).
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> Result<Json<BlogPostResponse>, ApiError> {
    state.guard.authorize(&headers)?;

    let oid = decode_id(&id, "post")?;
    let set = payload.into_update_document()?;

    let result = state
        .store
        .blog_posts()
        .update_one(doc! { "_id": oid }, doc! { "$set": set })
        .await
        .map_err(|e| ApiError::internal("Error updating blog post", e))?;

    if result.matched_count == 0 {
        return Err(ApiError::not_found("Post not found"));
    }

    // The post can be deleted between the update and the readback; report
    // that as not found too.
    let post = state
        .store
        .blog_posts()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error updating blog post", e))?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    Ok(Json(post.into()))
}

/// DELETE /api/blog/posts/{id} - Delete a post (admin only).
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.guard.authorize(&headers)?;

    let oid = decode_id(&id, "post")?;

    let result = state
        .store
        .blog_posts()
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error deleting blog post", e))?;

    if result.deleted_count == 0 {
        return Err(ApiError::not_found("Post not found"));
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Post deleted successfully".to_string(),
    }))
}

// ============================================================================
// Tests
// ============================================================================
