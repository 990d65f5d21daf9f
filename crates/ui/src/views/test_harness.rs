use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    ApiConfig, ApiError, AppServices, AuthService, AuthSession, CourseService, DocumentService,
    StudyApi, WorkspaceService, DEFAULT_BASE_URL,
};
use study_core::model::{
    AccessToken, Analysis, Course, CourseId, CourseTitle, Credentials, DeckId, Document,
    DocumentId, Flashcard, FlashcardDeck, Language, MediaKind, Question, QuestionId, Quiz, QuizId,
    Registration, UserId, UserProfile, ValidatedUpload,
};
use study_core::time::fixed_now;
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::views::components::Consent;
use crate::views::{CourseDashboardView, CoursesView, DocumentView, LoginView};

pub fn document(id: u64, media_type: MediaKind) -> Document {
    Document {
        id: DocumentId::new(id),
        filename: "lecture.pdf".into(),
        upload_date: fixed_now(),
        media_type,
        extracted_text: Some("Packets travel hop by hop.".into()),
        language: "en".into(),
        owner_id: UserId::new(1),
        course_id: Some(CourseId::new(1)),
        summary: None,
        key_concepts: None,
    }
}

/// Canned backend for rendering views without a server.
#[derive(Default)]
pub struct StubApi {
    pub courses: Mutex<Vec<Course>>,
    pub documents: Mutex<Vec<Document>>,
}

impl StubApi {
    fn document(&self, document_id: DocumentId) -> Result<Document, ApiError> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|doc| doc.id == document_id)
            .cloned()
            .ok_or(ApiError::Timeout)
    }
}

#[async_trait]
impl StudyApi for StubApi {
    async fn login(&self, _credentials: &Credentials) -> Result<AccessToken, ApiError> {
        Ok(AccessToken::new("token"))
    }

    async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        Ok(UserProfile {
            id: UserId::new(1),
            email: registration.email.clone(),
            full_name: registration.full_name.clone(),
            preferred_language: registration.preferred_language,
            is_active: true,
        })
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn create_course(&self, title: &CourseTitle) -> Result<Course, ApiError> {
        Ok(Course {
            id: CourseId::new(99),
            title: title.as_str().to_string(),
            created_at: fixed_now(),
            owner_id: UserId::new(1),
        })
    }

    async fn get_course(&self, course_id: CourseId) -> Result<Course, ApiError> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|course| course.id == course_id)
            .cloned()
            .ok_or(ApiError::Timeout)
    }

    async fn list_course_documents(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Document>, ApiError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| doc.course_id == Some(course_id))
            .cloned()
            .collect())
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn upload_document(
        &self,
        upload: ValidatedUpload,
        course_id: Option<CourseId>,
    ) -> Result<Document, ApiError> {
        let mut doc = document(50, upload.media_kind);
        doc.filename = upload.file_name;
        doc.course_id = course_id;
        Ok(doc)
    }

    async fn analyze_document(&self, document_id: DocumentId) -> Result<Analysis, ApiError> {
        self.document(document_id)?;
        Ok(Analysis {
            summary: "Fresh".into(),
            key_concepts: None,
        })
    }

    async fn generate_quiz(&self, document_id: DocumentId) -> Result<Quiz, ApiError> {
        Ok(Quiz {
            id: QuizId::new(1),
            title: "Quiz".into(),
            questions: vec![Question {
                id: QuestionId::new(1),
                question: "Q?".into(),
                options: vec!["A".into(), "B".into()],
                correct_answer_index: 0,
            }],
            document_id,
            created_at: None,
        })
    }

    async fn generate_flashcards(
        &self,
        document_id: DocumentId,
    ) -> Result<FlashcardDeck, ApiError> {
        Ok(FlashcardDeck {
            id: DeckId::new(1),
            title: "Cards".into(),
            cards: vec![Flashcard {
                term: "TCP".into(),
                definition: "Transport".into(),
            }],
            document_id,
            created_at: None,
        })
    }
}

#[derive(Clone)]
struct TestApp {
    language: Language,
    services: AppServices,
}

impl UiApp for TestApp {
    fn initial_language(&self) -> Language {
        self.language
    }

    fn api_base_url(&self) -> Url {
        self.services.config().base_url().clone()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn courses(&self) -> Arc<CourseService> {
        self.services.courses()
    }

    fn documents(&self) -> Arc<DocumentService> {
        self.services.documents()
    }

    fn workspace(&self) -> Arc<WorkspaceService> {
        self.services.workspace()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Courses,
    Login,
    Dashboard(u64),
    Document(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let language = props.app.language;
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(language));
    use_context_provider(|| Consent(Signal::new(true)));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard(course_id) => rsx! { CourseDashboardView { course_id } },
        ViewKind::Document(document_id) => rsx! { DocumentView { document_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<StubApi>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, language: Language, api: StubApi) -> ViewHarness {
    let api = Arc::new(api);
    let session = AuthSession::with_token(AccessToken::new("token"));
    let services = AppServices::with_api(
        ApiConfig::new(DEFAULT_BASE_URL).unwrap(),
        session,
        Arc::clone(&api) as Arc<dyn StudyApi>,
    );
    let app = Arc::new(TestApp { language, services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, api }
}
