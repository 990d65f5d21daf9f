mod account;
mod course;
mod document;
mod flashcard;
mod ids;
mod language;
mod quiz;
mod tool;
mod transcript;
mod upload;
pub(crate) mod wire;

pub use account::{
    AccessToken, AccountError, Credentials, Registration, RegistrationDraft, UserProfile,
};
pub use course::{Course, CourseError, CourseTitle};
pub use document::{Analysis, Concept, Document, MediaKind};
pub use flashcard::{Flashcard, FlashcardDeck};
pub use ids::{CourseId, DeckId, DocumentId, ParseIdError, QuestionId, QuizId, UserId};
pub use language::{Language, LanguageError};
pub use quiz::{Question, Quiz};
pub use tool::ToolPayload;
pub use transcript::{TranscriptLine, parse_transcript};
pub use upload::{ACCEPT_ATTRIBUTE, UploadError, UploadFile, ValidatedUpload};
