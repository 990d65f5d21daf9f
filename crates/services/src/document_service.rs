use std::sync::Arc;

use tracing::{debug, info};

use study_core::model::{CourseId, Document, DocumentId, UploadFile};

use crate::api::StudyApi;
use crate::error::DocumentServiceError;

#[derive(Clone)]
pub struct DocumentService {
    api: Arc<dyn StudyApi>,
}

impl DocumentService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `DocumentServiceError::Api` if the request fails.
    pub async fn list_documents(&self) -> Result<Vec<Document>, DocumentServiceError> {
        Ok(self.api.list_documents().await?)
    }

    /// Find a document by id. The backend has no single-document endpoint,
    /// so this lists the user's documents and filters.
    ///
    /// # Errors
    ///
    /// Returns `DocumentServiceError::NotFound` if the id is not listed.
    /// Returns `DocumentServiceError::Api` if the request fails.
    pub async fn get_document(
        &self,
        document_id: DocumentId,
    ) -> Result<Document, DocumentServiceError> {
        self.api
            .list_documents()
            .await?
            .into_iter()
            .find(|doc| doc.id == document_id)
            .ok_or(DocumentServiceError::NotFound(document_id))
    }

    /// Validate and upload a file, optionally filing it under a course.
    ///
    /// # Errors
    ///
    /// Returns `DocumentServiceError::Upload` when the file is rejected
    /// locally; no request is sent in that case.
    /// Returns `DocumentServiceError::Api` if the upload fails.
    pub async fn upload(
        &self,
        file: UploadFile,
        course_id: Option<CourseId>,
    ) -> Result<Document, DocumentServiceError> {
        let upload = file.validate()?;
        debug!(
            file = %upload.file_name,
            kind = ?upload.media_kind,
            bytes = upload.bytes.len(),
            "uploading document"
        );
        let document = self.api.upload_document(upload, course_id).await?;
        info!(document = %document.id, "uploaded document");
        Ok(document)
    }
}
