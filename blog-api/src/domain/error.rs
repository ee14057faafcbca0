use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid post ID")]
    InvalidPostId,

    #[error("No post exists")]
    NoPosts,

    #[error("Post not found")]
    PostNotFound,

    #[error("Post not found or no changes made")]
    PostNotChanged,

    #[error("Failed to encode tags: {0}")]
    TagEncoding(String),

    #[error("Failed to decode tags: {0}")]
    TagDecoding(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::InvalidPayload(_) | Self::ValidationError(_) | Self::InvalidPostId => 400,
            // An empty table is reported as a client error.
            Self::NoPosts => 400,
            Self::PostNotFound | Self::PostNotChanged => 404,
            Self::TagEncoding(_) | Self::TagDecoding(_) | Self::DatabaseError(_) => 500,
        }
    }

    /// Plain-text body sent to the client. Internal details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::TagEncoding(_) => "Failed to encode tags".to_string(),
            Self::TagDecoding(_) => "Failed to decode tags".to_string(),
            Self::DatabaseError(_) => "Database error".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::PostNotFound,
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::InvalidPayload("eof".into()).to_status_code(), 400);
        assert_eq!(DomainError::InvalidPostId.to_status_code(), 400);
        assert_eq!(DomainError::NoPosts.to_status_code(), 400);
        assert_eq!(DomainError::PostNotFound.to_status_code(), 404);
        assert_eq!(DomainError::PostNotChanged.to_status_code(), 404);
        assert_eq!(DomainError::TagDecoding("bad".into()).to_status_code(), 500);
        assert_eq!(DomainError::DatabaseError("down".into()).to_status_code(), 500);
    }

    #[test]
    fn test_client_message_hides_internal_details() {
        let err = DomainError::DatabaseError("password authentication failed".into());
        assert_eq!(err.client_message(), "Database error");

        let err = DomainError::ValidationError("Title and content are required".into());
        assert_eq!(err.client_message(), "Title and content are required");
    }

    #[test]
    fn test_row_not_found_maps_to_post_not_found() {
        let err = DomainError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::PostNotFound));
    }
}
