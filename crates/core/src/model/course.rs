use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, UserId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,
}

/// A trimmed, non-empty course title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if the title is blank after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CourseError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(deserialize_with = "crate::model::wire::timestamp")]
    pub created_at: DateTime<Utc>,
    pub owner_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        assert_eq!(CourseTitle::new("  Data Mining ").unwrap().as_str(), "Data Mining");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(CourseTitle::new("   ").unwrap_err(), CourseError::EmptyTitle);
    }

    #[test]
    fn course_deserializes_backend_shape() {
        let course: Course = serde_json::from_str(
            r#"{"id": 4, "title": "Networks", "created_at": "2024-03-01T10:00:00.512", "owner_id": 2}"#,
        )
        .unwrap();
        assert_eq!(course.id, CourseId::new(4));
        assert_eq!(course.owner_id, UserId::new(2));
    }
}
