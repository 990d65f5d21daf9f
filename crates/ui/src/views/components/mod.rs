mod consent;
mod file_upload;
mod flashcard_player;
mod media_player;
mod quiz_player;
mod transcript;

pub use consent::{Consent, ConsentModal};
pub use file_upload::FileUpload;
pub use flashcard_player::FlashcardPlayer;
pub use media_player::MediaPlayer;
pub use quiz_player::QuizPlayer;
pub use transcript::TranscriptView;
