use std::sync::Arc;

use tracing::info;

use study_core::model::{Course, CourseId, CourseTitle, Document};

use crate::api::StudyApi;
use crate::error::CourseServiceError;

/// A course together with the documents filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDashboard {
    pub course: Course,
    pub documents: Vec<Document>,
}

#[derive(Clone)]
pub struct CourseService {
    api: Arc<dyn StudyApi>,
}

impl CourseService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` if the request fails.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseServiceError> {
        Ok(self.api.list_courses().await?)
    }

    /// Create a course. Blank titles are rejected before any request.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Course` for an empty title.
    /// Returns `CourseServiceError::Api` if the request fails or times out.
    pub async fn create_course(&self, title: &str) -> Result<Course, CourseServiceError> {
        let title = CourseTitle::new(title)?;
        let course = self.api.create_course(&title).await?;
        info!(course = %course.id, "created course");
        Ok(course)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` if the request fails.
    pub async fn get_course(&self, course_id: CourseId) -> Result<Course, CourseServiceError> {
        Ok(self.api.get_course(course_id).await?)
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` if the request fails.
    pub async fn list_course_documents(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Document>, CourseServiceError> {
        Ok(self.api.list_course_documents(course_id).await?)
    }

    /// Fetch the course and then its documents.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Api` if either request fails.
    pub async fn load_dashboard(
        &self,
        course_id: CourseId,
    ) -> Result<CourseDashboard, CourseServiceError> {
        let course = self.api.get_course(course_id).await?;
        let documents = self.api.list_course_documents(course_id).await?;
        Ok(CourseDashboard { course, documents })
    }
}
