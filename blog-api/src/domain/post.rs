use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body shared by create and update.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl PostPayload {
    pub fn validate_for_create(&self) -> Result<(), DomainError> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(DomainError::ValidationError(
                "Title and content are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Row to insert. Tags are already encoded.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written by an update. `id` and `created_at` are never touched.
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: String,
    pub updated_at: DateTime<Utc>,
}

pub fn encode_tags(tags: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(tags).map_err(|e| DomainError::TagEncoding(e.to_string()))
}

pub fn decode_tags(raw: &str) -> Result<Vec<String>, DomainError> {
    // `null` was written for posts created without tags.
    serde_json::from_str::<Option<Vec<String>>>(raw)
        .map(Option::unwrap_or_default)
        .map_err(|e| DomainError::TagDecoding(e.to_string()))
}

/// Current time at the precision PostgreSQL stores.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl NewPost {
    pub fn from_payload(payload: PostPayload, at: DateTime<Utc>) -> Result<Self, DomainError> {
        let tags = encode_tags(payload.tags.as_deref().unwrap_or_default())?;
        Ok(Self {
            title: payload.title,
            content: payload.content,
            category: payload.category.unwrap_or_default(),
            tags,
            created_at: at,
            updated_at: at,
        })
    }
}

impl PostChanges {
    pub fn from_payload(payload: PostPayload, at: DateTime<Utc>) -> Result<Self, DomainError> {
        let tags = encode_tags(payload.tags.as_deref().unwrap_or_default())?;
        Ok(Self {
            title: payload.title,
            content: payload.content,
            category: payload.category.unwrap_or_default(),
            tags,
            updated_at: at,
        })
    }
}
