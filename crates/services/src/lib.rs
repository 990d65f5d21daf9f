#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod auth_session;
pub mod config;
pub mod course_service;
pub mod document_service;
pub mod error;
pub mod http;
pub mod workspace_service;

pub use api::StudyApi;
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use auth_session::AuthSession;
pub use config::{ApiConfig, COURSE_CREATE_TIMEOUT, DEFAULT_BASE_URL};
pub use course_service::{CourseDashboard, CourseService};
pub use document_service::DocumentService;
pub use error::{
    ApiError, AppServicesError, AuthServiceError, CourseServiceError, DocumentServiceError,
    FailureKind, WorkspaceServiceError,
};
pub use http::HttpStudyApi;
pub use workspace_service::WorkspaceService;
