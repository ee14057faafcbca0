use crate::domain::post::{decode_tags, NewPost, PostChanges};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError>;
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn post_from_row(row: &PgRow) -> Result<Post, DomainError> {
    let tags: Option<String> = row.try_get("tags")?;
    let category: Option<String> = row.try_get("category")?;

    Ok(Post {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        category: category.unwrap_or_default(),
        tags: decode_tags(tags.as_deref().unwrap_or("null"))?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<i64, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (title, content, category, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.created_at)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create post: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.try_get("id")?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, category, tags, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => post_from_row(&row),
            None => Err(DomainError::PostNotFound),
        }
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, category, tags, created_at, updated_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        rows.iter().map(post_from_row).collect()
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $1, content = $2, category = $3, tags = $4, updated_at = $5
            WHERE id = $6
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(&changes.category)
        .bind(&changes.tags)
        .bind(changes.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            Err(DomainError::PostNotChanged)
        } else {
            Ok(())
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            Err(DomainError::PostNotFound)
        } else {
            Ok(())
        }
    }
}
