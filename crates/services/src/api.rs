use async_trait::async_trait;

use study_core::model::{
    AccessToken, Analysis, Course, CourseId, CourseTitle, Credentials, Document, DocumentId,
    FlashcardDeck, Quiz, Registration, UserProfile, ValidatedUpload,
};

use crate::error::ApiError;

/// Request/response exchanges with the study backend.
///
/// Each call is a single attempt; callers decide what to do with failures.
#[async_trait]
pub trait StudyApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError>;

    async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    async fn create_course(&self, title: &CourseTitle) -> Result<Course, ApiError>;

    async fn get_course(&self, course_id: CourseId) -> Result<Course, ApiError>;

    async fn list_course_documents(&self, course_id: CourseId)
    -> Result<Vec<Document>, ApiError>;

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;

    async fn upload_document(
        &self,
        upload: ValidatedUpload,
        course_id: Option<CourseId>,
    ) -> Result<Document, ApiError>;

    async fn analyze_document(&self, document_id: DocumentId) -> Result<Analysis, ApiError>;

    async fn generate_quiz(&self, document_id: DocumentId) -> Result<Quiz, ApiError>;

    async fn generate_flashcards(&self, document_id: DocumentId)
    -> Result<FlashcardDeck, ApiError>;
}
