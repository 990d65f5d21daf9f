use std::sync::Arc;

use services::{AuthService, CourseService, DocumentService, WorkspaceService};
use study_core::model::{Document, Language};
use url::Url;

pub trait UiApp: Send + Sync {
    fn initial_language(&self) -> Language;
    fn api_base_url(&self) -> Url;

    fn auth(&self) -> Arc<AuthService>;
    fn courses(&self) -> Arc<CourseService>;
    fn documents(&self) -> Arc<DocumentService>;
    fn workspace(&self) -> Arc<WorkspaceService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_language: Language,
    api_base_url: Url,

    auth: Arc<AuthService>,
    courses: Arc<CourseService>,
    documents: Arc<DocumentService>,
    workspace: Arc<WorkspaceService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_language: app.initial_language(),
            api_base_url: app.api_base_url(),
            auth: app.auth(),
            courses: app.courses(),
            documents: app.documents(),
            workspace: app.workspace(),
        }
    }

    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
    }

    /// Where the backend serves a document's media file, if the name is usable.
    #[must_use]
    pub fn media_url(&self, document: &Document) -> Option<String> {
        document
            .media_url(&self.api_base_url)
            .ok()
            .map(String::from)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
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

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
