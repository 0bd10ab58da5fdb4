//! Document models for the MongoDB collections (used by the driver/serde).

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// Blog post document (`blog_posts` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: DateTime,
    pub category: String,
    pub read_time: String,
    pub tags: Vec<String>,
}

/// Project document (`projects` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub category: String,
}

/// Contact message document (`contact_messages` collection).
/// `read` defaults to false for documents written before the flag existed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub date: DateTime,
    #[serde(default)]
    pub read: bool,
}

/// Admin user document (`users` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_blog_post_serializes_without_id() {
        let post = BlogPost {
            id: None,
            title: "Title".to_string(),
            excerpt: "Excerpt".to_string(),
            content: "Content".to_string(),
            image: "https://example.com/img.png".to_string(),
            author: "Author".to_string(),
            date: DateTime::now(),
            category: "Rust".to_string(),
            read_time: "5 min".to_string(),
            tags: vec!["rust".to_string()],
        };

        let doc = mongodb::bson::to_document(&post).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(doc.contains_key("readTime"));
    }

    #[test]
    fn test_contact_message_read_defaults_to_false() {
        let doc = mongodb::bson::doc! {
            "name": "A",
            "email": "a@b.com",
            "subject": "S",
            "message": "M",
            "date": DateTime::now(),
        };

        let msg: ContactMessage = mongodb::bson::from_document(doc).unwrap();
        assert!(!msg.read);
    }

    #[test]
    fn test_project_uses_camel_case_field_names() {
        let project = Project {
            id: Some(ObjectId::new()),
            title: "T".to_string(),
            description: "D".to_string(),
            image: "I".to_string(),
            technologies: vec!["Rust".to_string()],
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example".to_string(),
            category: "web".to_string(),
        };

        let doc = mongodb::bson::to_document(&project).unwrap();
        assert!(doc.contains_key("liveUrl"));
        assert!(doc.contains_key("githubUrl"));
        assert!(doc.contains_key("_id"));
    }
}
