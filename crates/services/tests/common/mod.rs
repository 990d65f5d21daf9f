#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use services::{ApiConfig, ApiError, AppServices, AuthSession, StudyApi};
use study_core::model::{
    AccessToken, Analysis, Concept, Course, CourseId, CourseTitle, Credentials, DeckId,
    Document, DocumentId, Flashcard, FlashcardDeck, MediaKind, Question, QuestionId, Quiz,
    QuizId, Registration, UserId, UserProfile, ValidatedUpload,
};
use study_core::time::fixed_now;

/// In-memory backend that counts every request it receives.
#[derive(Default)]
pub struct FakeApi {
    pub session: AuthSession,
    pub requests: AtomicUsize,
    pub fail_generation: Mutex<bool>,
    pub documents: Mutex<Vec<Document>>,
    pub courses: Mutex<Vec<Course>>,
    pub uploads: Mutex<Vec<(String, Option<CourseId>)>>,
}

impl FakeApi {
    pub fn new(session: AuthSession) -> Self {
        Self {
            session,
            documents: Mutex::new(vec![document(7)]),
            ..Self::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn fail_generation(&self) {
        *self.fail_generation.lock().unwrap() = true;
    }

    fn hit(&self) -> Result<(), ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    fn generation(&self) -> Result<(), ApiError> {
        self.hit()?;
        if *self.fail_generation.lock().unwrap() {
            return Err(ApiError::Timeout);
        }
        Ok(())
    }
}

#[async_trait]
impl StudyApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if credentials.password() == "secret" {
            Ok(AccessToken::new("token-1"))
        } else {
            Err(ApiError::Unauthorized {
                detail: Some("Incorrect username or password".into()),
            })
        }
    }

    async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(UserProfile {
            id: UserId::new(1),
            email: registration.email.clone(),
            full_name: registration.full_name.clone(),
            preferred_language: registration.preferred_language,
            is_active: true,
        })
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.hit()?;
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn create_course(&self, title: &CourseTitle) -> Result<Course, ApiError> {
        self.hit()?;
        let mut courses = self.courses.lock().unwrap();
        let course = Course {
            id: CourseId::new(courses.len() as u64 + 1),
            title: title.as_str().to_string(),
            created_at: fixed_now(),
            owner_id: UserId::new(1),
        };
        courses.push(course.clone());
        Ok(course)
    }

    async fn get_course(&self, course_id: CourseId) -> Result<Course, ApiError> {
        self.hit()?;
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|course| course.id == course_id)
            .cloned()
            .ok_or(ApiError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                detail: Some("Course not found".into()),
            })
    }

    async fn list_course_documents(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Document>, ApiError> {
        self.hit()?;
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
        self.hit()?;
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn upload_document(
        &self,
        upload: ValidatedUpload,
        course_id: Option<CourseId>,
    ) -> Result<Document, ApiError> {
        self.hit()?;
        self.uploads
            .lock()
            .unwrap()
            .push((upload.file_name.clone(), course_id));
        let mut doc = document(100);
        doc.filename = upload.file_name;
        doc.media_type = upload.media_kind;
        doc.course_id = course_id;
        doc.summary = None;
        self.documents.lock().unwrap().push(doc.clone());
        Ok(doc)
    }

    async fn analyze_document(&self, _document_id: DocumentId) -> Result<Analysis, ApiError> {
        self.generation()?;
        Ok(Analysis {
            summary: "Fresh summary".into(),
            key_concepts: Some(vec![Concept {
                term: "Latency".into(),
                definition: "Delay".into(),
            }]),
        })
    }

    async fn generate_quiz(&self, document_id: DocumentId) -> Result<Quiz, ApiError> {
        self.generation()?;
        Ok(Quiz {
            id: QuizId::new(1),
            title: "Networks quiz".into(),
            questions: vec![Question {
                id: QuestionId::new(1),
                question: "Which layer routes packets?".into(),
                options: vec!["Link".into(), "Network".into()],
                correct_answer_index: 1,
            }],
            document_id,
            created_at: Some(fixed_now()),
        })
    }

    async fn generate_flashcards(
        &self,
        document_id: DocumentId,
    ) -> Result<FlashcardDeck, ApiError> {
        self.generation()?;
        Ok(FlashcardDeck {
            id: DeckId::new(1),
            title: "Networks cards".into(),
            cards: vec![Flashcard {
                term: "TCP".into(),
                definition: "Reliable transport".into(),
            }],
            document_id,
            created_at: Some(fixed_now()),
        })
    }
}

pub fn document(id: u64) -> Document {
    Document {
        id: DocumentId::new(id),
        filename: "networks.pdf".into(),
        upload_date: fixed_now(),
        media_type: MediaKind::Pdf,
        extracted_text: Some("Packets are routed by the network layer.".into()),
        language: "en".into(),
        owner_id: UserId::new(1),
        course_id: Some(CourseId::new(1)),
        summary: Some("Routing overview".into()),
        key_concepts: Some(vec![Concept {
            term: "Router".into(),
            definition: "Forwards packets".into(),
        }]),
    }
}

/// Services wired to a signed-in fake backend.
pub fn signed_in() -> (AppServices, Arc<FakeApi>) {
    let session = AuthSession::with_token(AccessToken::new("token-1"));
    build(session)
}

pub fn signed_out() -> (AppServices, Arc<FakeApi>) {
    build(AuthSession::new())
}

fn build(session: AuthSession) -> (AppServices, Arc<FakeApi>) {
    let api = Arc::new(FakeApi::new(session.clone()));
    let config = ApiConfig::new("http://localhost:8000/").expect("config");
    let services = AppServices::with_api(config, session, Arc::clone(&api) as Arc<dyn StudyApi>);
    (services, api)
}
