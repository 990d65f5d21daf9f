//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use study_core::model::{AccountError, CourseError, DocumentId, UploadError};
use study_core::study::WorkspaceError;

/// Coarse failure classes the views react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Input rejected locally or by the backend; show inline.
    Validation,
    /// Missing or expired token; send the user to the login screen.
    Authentication,
    /// Transport failure or unexpected status; the action can be retried.
    Network,
    /// The backend answered with something unusable.
    Payload,
}

/// Errors emitted by `StudyApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("session expired or credentials rejected")]
    Unauthorized { detail: Option<String> },
    #[error("backend returned {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("request timed out")]
    Timeout,
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Unauthenticated | Self::Unauthorized { .. } => FailureKind::Authentication,
            Self::Status { status, .. }
                if *status == StatusCode::BAD_REQUEST
                    || *status == StatusCode::UNPROCESSABLE_ENTITY =>
            {
                FailureKind::Validation
            }
            Self::Decode(_) => FailureKind::Payload,
            Self::Status { .. } | Self::Timeout | Self::Url(_) | Self::Http(_) => {
                FailureKind::Network
            }
        }
    }

    /// The backend's `detail` message, when it sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthServiceError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthServiceError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Account(_) => FailureKind::Validation,
            // Bad credentials on the login form are an input problem.
            Self::Api(ApiError::Unauthorized { .. }) => FailureKind::Validation,
            Self::Api(err) => err.kind(),
        }
    }
}

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl CourseServiceError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Course(_) => FailureKind::Validation,
            Self::Api(err) => err.kind(),
        }
    }
}

/// Errors emitted by `DocumentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentServiceError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("document {0} not found")]
    NotFound(DocumentId),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DocumentServiceError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Upload(_) => FailureKind::Validation,
            Self::NotFound(_) => FailureKind::Payload,
            Self::Api(err) => err.kind(),
        }
    }
}

/// Errors emitted by `WorkspaceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WorkspaceServiceError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WorkspaceServiceError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Workspace(
                WorkspaceError::EmptyPayload(_) | WorkspaceError::UnexpectedPayload { .. },
            ) => FailureKind::Payload,
            Self::Workspace(_) => FailureKind::Validation,
            Self::Api(err) => err.kind(),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("invalid backend url: {0}")]
    Config(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::study::ToolKind;

    #[test]
    fn api_errors_map_to_taxonomy() {
        assert_eq!(ApiError::Unauthenticated.kind(), FailureKind::Authentication);
        assert_eq!(
            ApiError::Unauthorized { detail: None }.kind(),
            FailureKind::Authentication
        );
        assert_eq!(ApiError::Timeout.kind(), FailureKind::Network);
        let rejected = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            detail: Some("Email already registered".into()),
        };
        assert_eq!(rejected.kind(), FailureKind::Validation);
        assert_eq!(rejected.detail(), Some("Email already registered"));
        let broken = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(broken.kind(), FailureKind::Network);
    }

    #[test]
    fn login_rejection_is_validation() {
        let err = AuthServiceError::from(ApiError::Unauthorized {
            detail: Some("Incorrect username or password".into()),
        });
        assert_eq!(err.kind(), FailureKind::Validation);
    }

    #[test]
    fn empty_generation_is_payload_failure() {
        let err = WorkspaceServiceError::from(WorkspaceError::EmptyPayload(ToolKind::Quiz));
        assert_eq!(err.kind(), FailureKind::Payload);
        let busy = WorkspaceServiceError::from(WorkspaceError::Busy);
        assert_eq!(busy.kind(), FailureKind::Validation);
    }
}
