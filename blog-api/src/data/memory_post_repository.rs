//! In-memory `PostRepository` used by the handler and service tests.
//!
//! Rows keep tags in their encoded form, so reads go through the same
//! decoding path as the PostgreSQL repository.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::post_repository::PostRepository;
use crate::domain::post::{decode_tags, NewPost, PostChanges};
use crate::domain::{DomainError, Post};

struct StoredPost {
    title: String,
    content: String,
    category: String,
    tags: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoredPost {
    fn to_post(&self, id: i64) -> Result<Post, DomainError> {
        Ok(Post {
            id,
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            tags: decode_tags(&self.tags)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, StoredPost>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the encoded tags of a row, bypassing the encoder.
    pub async fn set_raw_tags(&self, id: i64, raw: &str) {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&id) {
            row.tags = raw.to_string();
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<i64, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            StoredPost {
                title: post.title,
                content: post.content,
                category: post.category,
                tags: post.tags,
                created_at: post.created_at,
                updated_at: post.updated_at,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let table = self.table.read().await;
        match table.rows.get(&id) {
            Some(row) => row.to_post(id),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let table = self.table.read().await;
        table
            .rows
            .iter()
            .map(|(id, row)| row.to_post(*id))
            .collect()
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(DomainError::PostNotChanged)?;
        row.title = changes.title;
        row.content = changes.content;
        row.category = changes.category;
        row.tags = changes.tags;
        row.updated_at = changes.updated_at;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PostNotFound)
    }
}
