use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use study_core::model::{
    AccessToken, Analysis, Course, CourseId, CourseTitle, Credentials, Document, DocumentId,
    FlashcardDeck, Quiz, Registration, UserProfile, ValidatedUpload,
};

use crate::api::StudyApi;
use crate::auth_session::AuthSession;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Whether a request carries the session's bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    Bearer,
    // Login and sign-up: a 401 here is about the submitted form, not the session.
    Anonymous,
}

/// `StudyApi` over HTTP with bearer-token auth taken from an `AuthSession`.
#[derive(Clone)]
pub struct HttpStudyApi {
    client: Client,
    config: ApiConfig,
    session: AuthSession,
}

impl HttpStudyApi {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig, session: AuthSession) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config, session))
    }

    #[must_use]
    pub fn with_client(client: Client, config: ApiConfig, session: AuthSession) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn bearer(&self) -> Result<AccessToken, ApiError> {
        self.session.token().ok_or(ApiError::Unauthenticated)
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.bearer()?;
        let url = self.config.endpoint(path)?;
        Ok(self.client.get(url).bearer_auth(token.secret()))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.bearer()?;
        let url = self.config.endpoint(path)?;
        Ok(self.client.post(url).bearer_auth(token.secret()))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        auth: Auth,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(operation, "sending request");
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status == StatusCode::UNAUTHORIZED {
            if auth == Auth::Bearer && self.session.clear() {
                info!(operation, "backend rejected token; signed out");
            }
            return Err(ApiError::Unauthorized {
                detail: parse_detail(&body),
            });
        }
        if !status.is_success() {
            let detail = parse_detail(&body);
            warn!(operation, %status, detail = detail.as_deref(), "request failed");
            return Err(ApiError::Status { status, detail });
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(operation, error = %err, "unreadable response body");
            ApiError::Decode(err)
        })
    }
}

#[async_trait]
impl StudyApi for HttpStudyApi {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let url = self.config.endpoint("auth/token")?;
        let request = self.client.post(url).form(&[
            ("username", credentials.email()),
            ("password", credentials.password()),
        ]);
        let body: TokenResponse = self.send("login", Auth::Anonymous, request).await?;
        Ok(AccessToken::new(body.access_token))
    }

    async fn register(&self, registration: &Registration) -> Result<UserProfile, ApiError> {
        let url = self.config.endpoint("auth/register")?;
        let request = self.client.post(url).json(registration);
        self.send("register", Auth::Anonymous, request).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let request = self.get("courses/")?;
        self.send("list_courses", Auth::Bearer, request).await
    }

    async fn create_course(&self, title: &CourseTitle) -> Result<Course, ApiError> {
        let request = self
            .post("courses/")?
            .json(&CreateCourse { title })
            .timeout(self.config.course_create_timeout);
        self.send("create_course", Auth::Bearer, request).await
    }

    async fn get_course(&self, course_id: CourseId) -> Result<Course, ApiError> {
        let request = self.get(&format!("courses/{course_id}"))?;
        self.send("get_course", Auth::Bearer, request).await
    }

    async fn list_course_documents(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Document>, ApiError> {
        let request = self.get(&format!("courses/{course_id}/documents"))?;
        self.send("list_course_documents", Auth::Bearer, request).await
    }

    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let request = self.get("documents/")?;
        self.send("list_documents", Auth::Bearer, request).await
    }

    async fn upload_document(
        &self,
        upload: ValidatedUpload,
        course_id: Option<CourseId>,
    ) -> Result<Document, ApiError> {
        let ValidatedUpload {
            file_name,
            content_type,
            bytes,
            ..
        } = upload;
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)?;
        let mut form = Form::new().part("file", part);
        if let Some(course_id) = course_id {
            form = form.text("course_id", course_id.to_string());
        }
        let request = self.post("documents/upload")?.multipart(form);
        self.send("upload_document", Auth::Bearer, request).await
    }

    async fn analyze_document(&self, document_id: DocumentId) -> Result<Analysis, ApiError> {
        let request = self.post(&format!("documents/{document_id}/analyze"))?;
        self.send("analyze_document", Auth::Bearer, request).await
    }

    async fn generate_quiz(&self, document_id: DocumentId) -> Result<Quiz, ApiError> {
        let request = self.post(&format!("documents/{document_id}/quiz"))?;
        self.send("generate_quiz", Auth::Bearer, request).await
    }

    async fn generate_flashcards(
        &self,
        document_id: DocumentId,
    ) -> Result<FlashcardDeck, ApiError> {
        let request = self.post(&format!("documents/{document_id}/flashcards"))?;
        self.send("generate_flashcards", Auth::Bearer, request).await
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Http(err)
    }
}

/// Pull a readable message out of an error body.
///
/// The backend sends `{"detail": "..."}` for handled errors and a list of
/// `{"msg": ...}` objects for request validation failures.
fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(message) => Some(message),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg")?.as_str())
            .map(str::to_string),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct CreateCourse<'a> {
    title: &'a CourseTitle,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;

    fn api(config: ApiConfig, session: AuthSession) -> HttpStudyApi {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpStudyApi::with_client(client, config, session)
    }

    fn config_for(listener: &TcpListener) -> ApiConfig {
        let addr = listener.local_addr().unwrap();
        ApiConfig::new(&format!("http://{addr}/")).unwrap()
    }

    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..read]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return;
            }
        }
    }

    /// Serve exactly one request on a loopback port with a canned reply.
    async fn reply_once(status: &'static str, body: &'static str) -> ApiConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = config_for(&listener);
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            let reply = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        config
    }

    /// Accept one connection and never answer it.
    async fn stall() -> ApiConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = config_for(&listener);
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });
        config
    }

    #[test]
    fn detail_string_is_extracted() {
        assert_eq!(
            parse_detail(r#"{"detail":"Course not found"}"#).as_deref(),
            Some("Course not found")
        );
    }

    #[test]
    fn validation_detail_uses_first_message() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"}]}"#;
        assert_eq!(parse_detail(body).as_deref(), Some("field required"));
    }

    #[test]
    fn non_json_body_has_no_detail() {
        assert_eq!(parse_detail("Internal Server Error"), None);
        assert_eq!(parse_detail(r#"{"detail":42}"#), None);
    }

    #[tokio::test]
    async fn missing_token_fails_before_sending() {
        let api = HttpStudyApi::new(
            ApiConfig::new("http://127.0.0.1:9/").unwrap(),
            AuthSession::new(),
        )
        .unwrap();
        let err = api.list_courses().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn expired_token_clears_session() {
        let config =
            reply_once("401 Unauthorized", r#"{"detail":"Could not validate credentials"}"#).await;
        let session = AuthSession::with_token(AccessToken::new("stale"));
        let api = api(config, session.clone());

        let err = api.list_courses().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unauthorized { detail: Some(ref detail) } if detail == "Could not validate credentials"
        ));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_login_keeps_existing_session() {
        let config =
            reply_once("401 Unauthorized", r#"{"detail":"Incorrect username or password"}"#).await;
        let session = AuthSession::with_token(AccessToken::new("current"));
        let api = api(config, session.clone());

        let credentials = Credentials::new("lina@example.com", "wrong").unwrap();
        let err = api.login(&credentials).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(session.token().unwrap().secret(), "current");
    }

    #[tokio::test]
    async fn login_returns_issued_token() {
        let config =
            reply_once("200 OK", r#"{"access_token":"fresh","token_type":"bearer"}"#).await;
        let api = api(config, AuthSession::new());

        let credentials = Credentials::new("lina@example.com", "secret").unwrap();
        let token = api.login(&credentials).await.unwrap();
        assert_eq!(token.secret(), "fresh");
    }

    #[tokio::test]
    async fn course_create_gives_up_after_its_timeout() {
        let mut config = stall().await;
        config.course_create_timeout = Duration::from_millis(200);
        let session = AuthSession::with_token(AccessToken::new("abc"));
        let api = api(config, session.clone());

        let title = CourseTitle::new("Networks").unwrap();
        let err = api.create_course(&title).await.unwrap_err();
        assert!(matches!(err, ApiError::Timeout));
        assert!(session.is_authenticated());
    }
}
