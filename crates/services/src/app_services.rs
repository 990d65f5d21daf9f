use std::sync::Arc;

use crate::api::StudyApi;
use crate::auth_service::AuthService;
use crate::auth_session::AuthSession;
use crate::config::ApiConfig;
use crate::course_service::CourseService;
use crate::document_service::DocumentService;
use crate::error::AppServicesError;
use crate::http::HttpStudyApi;
use crate::workspace_service::WorkspaceService;

/// Assembles app-facing services around one backend client and session.
#[derive(Clone)]
pub struct AppServices {
    config: ApiConfig,
    session: AuthSession,
    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    documents: Arc<DocumentService>,
    workspace: Arc<WorkspaceService>,
}

impl AppServices {
    /// Build services talking to the configured backend over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be created.
    pub fn new_http(config: ApiConfig) -> Result<Self, AppServicesError> {
        let session = AuthSession::new();
        let api = HttpStudyApi::new(config.clone(), session.clone())?;
        Ok(Self::with_api(config, session, Arc::new(api)))
    }

    /// Build services around any `StudyApi`; `session` must be the one the
    /// api reads its token from.
    #[must_use]
    pub fn with_api(config: ApiConfig, session: AuthSession, api: Arc<dyn StudyApi>) -> Self {
        Self {
            config,
            auth: Arc::new(AuthService::new(Arc::clone(&api), session.clone())),
            session,
            courses: Arc::new(CourseService::new(Arc::clone(&api))),
            documents: Arc::new(DocumentService::new(Arc::clone(&api))),
            workspace: Arc::new(WorkspaceService::new(api)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> AuthSession {
        self.session.clone()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn courses(&self) -> Arc<CourseService> {
        Arc::clone(&self.courses)
    }

    #[must_use]
    pub fn documents(&self) -> Arc<DocumentService> {
        Arc::clone(&self.documents)
    }

    #[must_use]
    pub fn workspace(&self) -> Arc<WorkspaceService> {
        Arc::clone(&self.workspace)
    }
}
