use crate::data::PostRepository;
use crate::domain::post::{self, NewPost, PostChanges, PostPayload};
use crate::domain::{DomainError, Post};
use std::sync::Arc;

pub struct PostService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl PostService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    /// Inserts a new post. The generated id is logged but not handed back.
    pub async fn create_post(&self, req: PostPayload) -> Result<(), DomainError> {
        req.validate_for_create()?;

        let new_post = NewPost::from_payload(req, post::now())?;
        let id = self.post_repo.create(new_post).await?;

        tracing::info!("Post created: id={}", id);

        Ok(())
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.post_repo.find_by_id(id).await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.post_repo.list().await?;

        if posts.is_empty() {
            return Err(DomainError::NoPosts);
        }

        Ok(posts)
    }

    /// Overwrites every mutable column. Title and content are not re-validated.
    pub async fn update_post(&self, id: i64, req: PostPayload) -> Result<(), DomainError> {
        let changes = PostChanges::from_payload(req, post::now())?;
        self.post_repo.update(id, changes).await?;

        tracing::info!("Post updated: id={}", id);

        Ok(())
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.post_repo.delete(id).await?;

        tracing::info!("Post deleted: id={}", id);

        Ok(())
    }
}
