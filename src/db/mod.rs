pub mod models;

use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};

use crate::config::AppConfig;
use crate::error::ApiError;
use self::models::{BlogPost, ContactMessage, Project, User};

/// Handle to the MongoDB client and the application database.
///
/// Cheap to clone. The driver manages its own connection pool and establishes
/// connections lazily on first operation.
#[derive(Clone)]
pub struct Store {
    client: Client,
    database: Database,
}

impl Store {
    pub async fn connect(config: &AppConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing MongoDB client...");
        tracing::debug!(
            "MongoDB URL: {}",
            config.mongo_url.replace(
                |c: char| !c.is_ascii_alphanumeric() && c != ':' && c != '/' && c != '@' && c != '.',
                "*"
            )
        );

        let client = Client::with_uri_str(&config.mongo_url).await?;
        let database = client.database(&config.db_name);

        Ok(Self { client, database })
    }

    pub fn blog_posts(&self) -> Collection<BlogPost> {
        self.database.collection("blog_posts")
    }

    pub fn projects(&self) -> Collection<Project> {
        self.database.collection("projects")
    }

    pub fn contact_messages(&self) -> Collection<ContactMessage> {
        self.database.collection("contact_messages")
    }

    pub fn users(&self) -> Collection<User> {
        self.database.collection("users")
    }

    /// Round-trip a ping through the server to confirm the database is
    /// reachable.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Release the client's connections. Call once at shutdown.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Parse a path identifier into an ObjectId. `noun` names the resource for
/// the error message ("post", "project", "message").
pub fn decode_id(value: &str, noun: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(value).map_err(|_| {
        ApiError::validation_with_detail(
            format!("Invalid {noun} ID"),
            "Identifiers must be 24 hexadecimal characters",
        )
    })
}

/// Render an ObjectId in its canonical 24-character hex form.
pub fn encode_id(id: &ObjectId) -> String {
    id.to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_id_round_trips_generated_ids() {
        let id = ObjectId::new();
        let encoded = encode_id(&id);

        let decoded = decode_id(&encoded, "post").unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn test_decode_id_rejects_wrong_length() {
        let err = decode_id("abc123", "post").unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid post ID");
    }

    #[test]
    fn test_decode_id_rejects_non_hex_characters() {
        // Right length, wrong alphabet.
        let err = decode_id("zzzzzzzzzzzzzzzzzzzzzzzz", "project").unwrap_err();
        assert_eq!(err.to_string(), "Invalid project ID");
    }

    #[test]
    fn test_encode_id_is_lowercase_hex() {
        let encoded = encode_id(&ObjectId::new());
        assert_eq!(encoded.len(), 24);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
