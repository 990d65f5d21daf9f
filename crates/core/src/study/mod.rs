//! View-state machines behind the document study screen.

mod flashcard_viewer;
pub mod pacing;
mod quiz_session;
mod workspace;

pub use flashcard_viewer::{CardSide, FlashcardError, FlashcardViewer, Navigation};
pub use pacing::{FLASHCARD_SETTLE_DELAY, QUIZ_ADVANCE_DELAY, ScheduledTransition};
pub use quiz_session::{AnswerRecord, QuizError, QuizPhase, QuizResult, QuizSession, Submission};
pub use workspace::{
    ContentTab, StudyWorkspace, ToolKind, ToolRequest, ToolView, WorkspaceError,
};
