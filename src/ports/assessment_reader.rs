use async_trait::async_trait;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::UserId;

/// Read-only port for a user's completed assessments.
#[async_trait]
pub trait AssessmentReader: Send + Sync {
    /// Fetches all completed assessments for a user, newest first.
    ///
    /// Failure here is fatal to insight generation; the caller maps it to
    /// the fixed fallback result.
    async fn fetch_assessments(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AssessmentRecord>, AssessmentReadError>;
}

/// Errors that can occur while fetching assessments.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentReadError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Assessment store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAssessmentReader;

    #[async_trait]
    impl AssessmentReader for MockAssessmentReader {
        async fn fetch_assessments(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<AssessmentRecord>, AssessmentReadError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn reader_trait_is_object_safe() {
        let _reader: Box<dyn AssessmentReader> = Box::new(MockAssessmentReader);
    }

    #[test]
    fn error_messages_include_cause() {
        let err = AssessmentReadError::Database("connection reset".to_string());
        assert!(format!("{}", err).contains("connection reset"));
    }
}
