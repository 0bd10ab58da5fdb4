/**
 * Project Routes
 * CRUD endpoints backed by the projects collection
 */
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::db::models::Project;
use crate::db::{decode_id, encode_id};
use crate::error::ApiError;
use crate::routes::{require_non_empty, DeleteResponse};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "web".to_string()
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub category: String,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.map(|oid| encode_id(&oid)).unwrap_or_default(),
            title: project.title,
            description: project.description,
            image: project.image,
            technologies: project.technologies,
            live_url: project.live_url,
            github_url: project.github_url,
            category: project.category,
        }
    }
}

impl CreateProjectRequest {
    fn into_document(self) -> Project {
        Project {
            id: None,
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: self.technologies,
            live_url: self.live_url,
            github_url: self.github_url,
            category: self.category,
        }
    }
}

impl UpdateProjectRequest {
    fn into_update_document(self) -> Result<Document, ApiError> {
        let mut set = Document::new();

        if let Some(title) = self.title {
            set.insert("title", title);
        }
        if let Some(description) = self.description {
            set.insert("description", description);
        }
        if let Some(image) = self.image {
            set.insert("image", image);
        }
        if let Some(technologies) = self.technologies {
            set.insert("technologies", technologies);
        }
        if let Some(live_url) = self.live_url {
            set.insert("liveUrl", live_url);
        }
        if let Some(github_url) = self.github_url {
            set.insert("githubUrl", github_url);
        }
        if let Some(category) = self.category {
            set.insert("category", category);
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

/// GET /api/projects - List all projects in insertion order.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects: Vec<Project> = state
        .store
        .projects()
        .find(doc! {})
        .await
        .map_err(|e| ApiError::internal("Error fetching projects", e))?
        .try_collect()
        .await
        .map_err(|e| ApiError::internal("Error fetching projects", e))?;

    Ok(Json(
        projects.into_iter().map(ProjectResponse::from).collect(),
    ))
}

/// GET /api/projects/{id} - Fetch a single project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let oid = decode_id(&id, "project")?;

    let project = state
        .store
        .projects()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error fetching project", e))?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project.into()))
}

/// POST /api/projects - Create a project (admin only).
pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state.guard.authorize(&headers)?;

    require_non_empty(&[
        ("Title", &payload.title),
        ("Description", &payload.description),
        ("Image", &payload.image),
        ("Live URL", &payload.live_url),
        ("GitHub URL", &payload.github_url),
    ])?;

    let document = payload.into_document();

    let inserted = state
        .store
        .projects()
        .insert_one(&document)
        .await
        .map_err(|e| ApiError::internal("Error creating project", e))?;

    let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
        ApiError::internal("Error creating project", "inserted id was not an ObjectId")
    })?;

    let project = state
        .store
        .projects()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error creating project", e))?
        .ok_or_else(|| {
            ApiError::internal("Error creating project", "created project missing on readback")
        })?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// PUT /api/projects/{id} - Partial update (admin only).
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    state.guard.authorize(&headers)?;

    let oid = decode_id(&id, "project")?;
    let set = payload.into_update_document()?;

    let result = state
        .store
        .projects()
        .update_one(doc! { "_id": oid }, doc! { "$set": set })
        .await
        .map_err(|e| ApiError::internal("Error updating project", e))?;

    if result.matched_count == 0 {
        return Err(ApiError::not_found("Project not found"));
    }

    let project = state
        .store
        .projects()
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error updating project", e))?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project.into()))
}

/// DELETE /api/projects/{id} - Delete a project (admin only).
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.guard.authorize(&headers)?;

    let oid = decode_id(&id, "project")?;

    let result = state
        .store
        .projects()
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| ApiError::internal("Error deleting project", e))?;

    if result.deleted_count == 0 {
        return Err(ApiError::not_found("Project not found"));
    }

    Ok(Json(DeleteResponse {
        success: true,
        message: "Project deleted successfully".to_string(),
    }))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use crate::routes::testing;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;
    use tower::ServiceExt;

    fn project_router(state: AppState) -> Router {
        Router::new()
            .route("/api/projects", get(list_projects).post(create_project))
            .route(
                "/api/projects/{id}",
                get(get_project).put(update_project).delete(delete_project),
            )
            .with_state(state)
    }

    async fn error_body(res: axum::response::Response) -> ErrorResponse {
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_get_project_rejects_malformed_id() {
        let app = project_router(testing::test_state().await);

        let req = Request::get("/api/projects/xyz").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err = error_body(res).await;
        assert_eq!(err.error, "Invalid project ID");
    }

    #[tokio::test]
    async fn test_create_project_requires_token() {
        let app = project_router(testing::test_state().await);

        let body = json!({
            "title": "T", "description": "D", "image": "I",
            "technologies": [], "liveUrl": "https://example.com",
            "githubUrl": "https://github.com/example"
        });
        let req = Request::post("/api/projects")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let err = error_body(res).await;
        assert_eq!(err.error, "Authorization required");
    }

    #[tokio::test]
    async fn test_update_project_rejects_empty_body() {
        let state = testing::test_state().await;
        let token = testing::admin_token(&state);
        let app = project_router(state);

        let uri = format!("/api/projects/{}", ObjectId::new().to_hex());
        let req = Request::put(&uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from("{}"))
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err = error_body(res).await;
        assert_eq!(err.error, "No data to update");
    }

    #[test]
    fn test_create_request_defaults_category() {
        let payload: CreateProjectRequest = serde_json::from_value(json!({
            "title": "T", "description": "D", "image": "I",
            "technologies": ["Rust"], "liveUrl": "https://example.com",
            "githubUrl": "https://github.com/example"
        }))
        .unwrap();

        assert_eq!(payload.category, "web");
    }

    #[test]
    fn test_update_document_uses_camel_case_keys() {
        let payload = UpdateProjectRequest {
            live_url: Some("https://example.org".to_string()),
            github_url: Some("https://github.com/other".to_string()),
            ..Default::default()
        };

        let set = payload.into_update_document().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains_key("liveUrl"));
        assert!(set.contains_key("githubUrl"));
    }

    #[test]
    fn test_response_encodes_id_as_hex() {
        let oid = ObjectId::new();
        let project = Project {
            id: Some(oid),
            title: "T".to_string(),
            description: "D".to_string(),
            image: "I".to_string(),
            technologies: vec![],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        };

        let response = ProjectResponse::from(project);
        assert_eq!(response.id, oid.to_hex());
    }
}
