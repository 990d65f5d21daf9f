use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{Analysis, Document, DocumentId, FlashcardDeck, MediaKind, Quiz, ToolPayload};
use crate::study::flashcard_viewer::FlashcardViewer;
use crate::study::quiz_session::QuizSession;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkspaceError {
    #[error("another request is already in flight")]
    Busy,

    #[error("a study tool is already open")]
    ToolAlreadyOpen,

    #[error("no study tool is open")]
    NoActiveTool,

    #[error("no {0} request is in flight")]
    NoPendingRequest(ToolKind),

    #[error("expected a {expected} payload, got {actual}")]
    UnexpectedPayload { expected: ToolKind, actual: ToolKind },

    #[error("generated {0} is empty")]
    EmptyPayload(ToolKind),

    #[error("no analysis request is in flight")]
    NoPendingAnalysis,

    #[error("workspace was closed")]
    TornDown,

    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

//
// ─── TAGS ──────────────────────────────────────────────────────────────────────
//

/// Content regions of the document view. `Text` and `Transcript` are
/// alternatives: one is shown depending on the document's media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTab {
    Summary,
    Concepts,
    Text,
    Transcript,
    Tools,
}

impl ContentTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Concepts => "concepts",
            Self::Text => "text",
            Self::Transcript => "transcript",
            Self::Tools => "tools",
        }
    }

    /// Map `Text`/`Transcript` onto whichever one the media kind uses.
    #[must_use]
    pub const fn for_media(self, kind: MediaKind) -> Self {
        match self {
            Self::Text | Self::Transcript if kind.is_playable() => Self::Transcript,
            Self::Text | Self::Transcript => Self::Text,
            other => other,
        }
    }
}

impl fmt::Display for ContentTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTab {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Self::Summary),
            "concepts" => Ok(Self::Concepts),
            "text" => Ok(Self::Text),
            "transcript" => Ok(Self::Transcript),
            "tools" => Ok(Self::Tools),
            other => Err(WorkspaceError::UnknownTab(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Quiz,
    Flashcards,
}

impl ToolKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Flashcards => "flashcards",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(Self::Quiz),
            "flashcards" => Ok(Self::Flashcards),
            other => Err(WorkspaceError::UnknownTool(other.to_string())),
        }
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// The mounted full-screen tool. Replaces the tabbed view while present.
#[derive(Debug)]
pub enum ToolView {
    Quiz { title: String, session: QuizSession },
    Flashcards { title: String, viewer: FlashcardViewer },
}

impl ToolView {
    #[must_use]
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Quiz { .. } => ToolKind::Quiz,
            Self::Flashcards { .. } => ToolKind::Flashcards,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Quiz { title, .. } | Self::Flashcards { title, .. } => title,
        }
    }

    fn teardown(&mut self) {
        match self {
            Self::Quiz { session, .. } => session.teardown(),
            Self::Flashcards { viewer, .. } => viewer.teardown(),
        }
    }
}

/// A generation request the caller must send to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRequest {
    pub kind: ToolKind,
    pub document_id: DocumentId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlight {
    Tool(ToolKind),
    Analysis,
}

/// Per-document view state: which tab is visible, which tool is mounted, and
/// whether a remote action is outstanding. Lives as long as the detail view.
#[derive(Debug)]
pub struct StudyWorkspace {
    document: Document,
    active_tab: ContentTab,
    active_tool: Option<ToolView>,
    in_flight: Option<InFlight>,
    last_quiz: Option<Quiz>,
    last_deck: Option<FlashcardDeck>,
    torn_down: bool,
}

impl StudyWorkspace {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            active_tab: ContentTab::Summary,
            active_tool: None,
            in_flight: None,
            last_quiz: None,
            last_deck: None,
            torn_down: false,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn active_tab(&self) -> ContentTab {
        self.active_tab
    }

    #[must_use]
    pub fn active_tool(&self) -> Option<&ToolView> {
        self.active_tool.as_ref()
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut ToolView> {
        self.active_tool.as_mut()
    }

    #[must_use]
    pub fn active_tool_kind(&self) -> Option<ToolKind> {
        self.active_tool.as_ref().map(ToolView::kind)
    }

    /// Tool whose generation request is outstanding, if any.
    #[must_use]
    pub fn pending_tool(&self) -> Option<ToolKind> {
        match self.in_flight {
            Some(InFlight::Tool(kind)) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.in_flight == Some(InFlight::Analysis)
    }

    /// Any remote action outstanding; triggering controls stay disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn needs_analysis(&self) -> bool {
        !self.document.has_summary()
    }

    /// Last quiz received during this document session.
    #[must_use]
    pub fn quiz_payload(&self) -> Option<&Quiz> {
        self.last_quiz.as_ref()
    }

    #[must_use]
    pub fn flashcard_payload(&self) -> Option<&FlashcardDeck> {
        self.last_deck.as_ref()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Tabs shown for this document, in display order.
    #[must_use]
    pub fn available_tabs(&self) -> [ContentTab; 4] {
        [
            ContentTab::Summary,
            ContentTab::Concepts,
            ContentTab::Text.for_media(self.document.media_type),
            ContentTab::Tools,
        ]
    }

    /// Always allowed. Returns the tab actually shown.
    pub fn select_tab(&mut self, tab: ContentTab) -> ContentTab {
        self.active_tab = tab.for_media(self.document.media_type);
        self.active_tab
    }

    /// Mark a tool generation as in flight and describe the request to send.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Busy`, `WorkspaceError::ToolAlreadyOpen` or
    /// `WorkspaceError::TornDown` when a request must not be started.
    pub fn begin_tool_request(&mut self, kind: ToolKind) -> Result<ToolRequest, WorkspaceError> {
        self.ensure_live()?;
        if self.in_flight.is_some() {
            return Err(WorkspaceError::Busy);
        }
        if self.active_tool.is_some() {
            return Err(WorkspaceError::ToolAlreadyOpen);
        }
        self.in_flight = Some(InFlight::Tool(kind));
        Ok(ToolRequest {
            kind,
            document_id: self.document.id,
        })
    }

    /// Mount the generated tool. On any error the tool stays closed.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError` when no matching request is in flight, the
    /// payload kind differs from the request, or the payload is empty.
    pub fn complete_tool_request(
        &mut self,
        payload: ToolPayload,
    ) -> Result<ToolKind, WorkspaceError> {
        self.ensure_live()?;
        let actual = payload.kind();
        let expected = self
            .pending_tool()
            .ok_or(WorkspaceError::NoPendingRequest(actual))?;
        self.in_flight = None;
        if expected != actual {
            return Err(WorkspaceError::UnexpectedPayload { expected, actual });
        }

        let view = match payload {
            ToolPayload::Quiz(quiz) => {
                let session = QuizSession::new(quiz.questions.clone())
                    .map_err(|_| WorkspaceError::EmptyPayload(ToolKind::Quiz))?;
                let title = quiz.title.clone();
                self.last_quiz = Some(quiz);
                ToolView::Quiz { title, session }
            }
            ToolPayload::Flashcards(deck) => {
                let viewer = FlashcardViewer::new(deck.cards.clone())
                    .map_err(|_| WorkspaceError::EmptyPayload(ToolKind::Flashcards))?;
                let title = deck.title.clone();
                self.last_deck = Some(deck);
                ToolView::Flashcards { title, viewer }
            }
        };
        self.active_tool = Some(view);
        Ok(actual)
    }

    /// The generation request failed; nothing else changes.
    pub fn fail_tool_request(&mut self) {
        if matches!(self.in_flight, Some(InFlight::Tool(_))) {
            self.in_flight = None;
        }
    }

    /// Unmount the active tool. The generated payload is kept in memory.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::NoActiveTool` when nothing is open.
    pub fn close_tool(&mut self) -> Result<ToolKind, WorkspaceError> {
        let mut view = self.active_tool.take().ok_or(WorkspaceError::NoActiveTool)?;
        view.teardown();
        Ok(view.kind())
    }

    /// # Errors
    ///
    /// Returns `WorkspaceError::Busy` or `WorkspaceError::TornDown`.
    pub fn begin_analysis(&mut self) -> Result<DocumentId, WorkspaceError> {
        self.ensure_live()?;
        if self.in_flight.is_some() {
            return Err(WorkspaceError::Busy);
        }
        self.in_flight = Some(InFlight::Analysis);
        Ok(self.document.id)
    }

    /// # Errors
    ///
    /// Returns `WorkspaceError::NoPendingAnalysis` if no analysis was started.
    pub fn complete_analysis(&mut self, analysis: Analysis) -> Result<(), WorkspaceError> {
        self.ensure_live()?;
        if !self.is_analyzing() {
            return Err(WorkspaceError::NoPendingAnalysis);
        }
        self.in_flight = None;
        self.document.apply_analysis(analysis);
        Ok(())
    }

    pub fn fail_analysis(&mut self) {
        if self.is_analyzing() {
            self.in_flight = None;
        }
    }

    /// The owning view is going away: stop timers and refuse late responses.
    pub fn teardown(&mut self) {
        if let Some(view) = self.active_tool.as_mut() {
            view.teardown();
        }
        self.in_flight = None;
        self.torn_down = true;
    }

    fn ensure_live(&self) -> Result<(), WorkspaceError> {
        if self.torn_down {
            return Err(WorkspaceError::TornDown);
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Concept, DeckId, Flashcard, Question, QuestionId, QuizId, UserId};
    use crate::time::fixed_now;

    fn document(kind: MediaKind) -> Document {
        Document {
            id: DocumentId::new(9),
            filename: "notes.pdf".into(),
            upload_date: fixed_now(),
            media_type: kind,
            extracted_text: Some("body".into()),
            language: "en".into(),
            owner_id: UserId::new(1),
            course_id: None,
            summary: Some("Existing summary".into()),
            key_concepts: Some(vec![Concept {
                term: "TCP".into(),
                definition: "transport".into(),
            }]),
        }
    }

    fn quiz(questions: usize) -> ToolPayload {
        ToolPayload::Quiz(Quiz {
            id: QuizId::new(1),
            title: "Quiz".into(),
            questions: (0..questions)
                .map(|i| Question {
                    id: QuestionId::new(i as u64),
                    question: "Q".into(),
                    options: vec!["a".into(), "b".into()],
                    correct_answer_index: 0,
                })
                .collect(),
            document_id: DocumentId::new(9),
            created_at: None,
        })
    }

    fn deck() -> ToolPayload {
        ToolPayload::Flashcards(FlashcardDeck {
            id: DeckId::new(2),
            title: "Cards".into(),
            cards: vec![Flashcard {
                term: "t".into(),
                definition: "d".into(),
            }],
            document_id: DocumentId::new(9),
            created_at: None,
        })
    }

    #[test]
    fn starts_on_summary_without_tool() {
        let ws = StudyWorkspace::new(document(MediaKind::Pdf));
        assert_eq!(ws.active_tab(), ContentTab::Summary);
        assert_eq!(ws.active_tool_kind(), None);
        assert!(!ws.is_busy());
    }

    #[test]
    fn tabs_depend_on_media_kind() {
        let pdf = StudyWorkspace::new(document(MediaKind::Pdf));
        assert_eq!(pdf.available_tabs()[2], ContentTab::Text);
        let mut audio = StudyWorkspace::new(document(MediaKind::Audio));
        assert_eq!(audio.available_tabs()[2], ContentTab::Transcript);
        assert_eq!(audio.select_tab(ContentTab::Text), ContentTab::Transcript);
    }

    #[test]
    fn select_tab_is_unconditional() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        assert_eq!(ws.select_tab(ContentTab::Concepts), ContentTab::Concepts);
        assert_eq!(ws.select_tab(ContentTab::Transcript), ContentTab::Text);
    }

    #[test]
    fn successful_generation_mounts_tool() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        let request = ws.begin_tool_request(ToolKind::Quiz).unwrap();
        assert_eq!(request.document_id, DocumentId::new(9));
        assert!(ws.is_busy());
        assert_eq!(ws.complete_tool_request(quiz(2)).unwrap(), ToolKind::Quiz);
        assert_eq!(ws.active_tool_kind(), Some(ToolKind::Quiz));
        assert_eq!(ws.active_tool().unwrap().title(), "Quiz");
        assert!(!ws.is_busy());
    }

    #[test]
    fn failed_generation_leaves_document_untouched() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        let before = ws.document().clone();
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        ws.fail_tool_request();
        assert_eq!(ws.active_tool_kind(), None);
        assert_eq!(ws.document(), &before);
        assert!(!ws.is_busy());
    }

    #[test]
    fn concurrent_requests_are_refused() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        assert_eq!(
            ws.begin_tool_request(ToolKind::Flashcards).unwrap_err(),
            WorkspaceError::Busy
        );
        assert_eq!(ws.begin_analysis().unwrap_err(), WorkspaceError::Busy);
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        assert_eq!(
            ws.complete_tool_request(deck()).unwrap_err(),
            WorkspaceError::UnexpectedPayload {
                expected: ToolKind::Quiz,
                actual: ToolKind::Flashcards
            }
        );
        assert_eq!(ws.active_tool_kind(), None);
        assert!(!ws.is_busy());
    }

    #[test]
    fn empty_payload_keeps_tool_closed() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        assert_eq!(
            ws.complete_tool_request(quiz(0)).unwrap_err(),
            WorkspaceError::EmptyPayload(ToolKind::Quiz)
        );
        assert_eq!(ws.active_tool_kind(), None);
    }

    #[test]
    fn unsolicited_payload_is_rejected() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        assert_eq!(
            ws.complete_tool_request(deck()).unwrap_err(),
            WorkspaceError::NoPendingRequest(ToolKind::Flashcards)
        );
    }

    #[test]
    fn close_keeps_payload_and_reopen_needs_new_request() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Flashcards).unwrap();
        ws.complete_tool_request(deck()).unwrap();
        assert_eq!(
            ws.begin_tool_request(ToolKind::Quiz).unwrap_err(),
            WorkspaceError::ToolAlreadyOpen
        );
        assert_eq!(ws.close_tool().unwrap(), ToolKind::Flashcards);
        assert!(ws.flashcard_payload().is_some());
        assert_eq!(ws.active_tool_kind(), None);
        assert!(ws.begin_tool_request(ToolKind::Flashcards).is_ok());
    }

    #[test]
    fn close_without_tool_is_refused() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        assert_eq!(ws.close_tool().unwrap_err(), WorkspaceError::NoActiveTool);
    }

    #[test]
    fn analysis_updates_summary_in_place() {
        let mut doc = document(MediaKind::Pdf);
        doc.summary = None;
        let mut ws = StudyWorkspace::new(doc);
        assert!(ws.needs_analysis());
        ws.begin_analysis().unwrap();
        assert!(ws.is_analyzing());
        ws.complete_analysis(Analysis {
            summary: "New".into(),
            key_concepts: None,
        })
        .unwrap();
        assert!(!ws.needs_analysis());
        assert_eq!(ws.document().summary.as_deref(), Some("New"));
    }

    #[test]
    fn failed_analysis_keeps_state() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_analysis().unwrap();
        ws.fail_analysis();
        assert!(!ws.is_busy());
        assert_eq!(ws.document().summary.as_deref(), Some("Existing summary"));
    }

    #[test]
    fn late_responses_after_teardown_are_refused() {
        let mut ws = StudyWorkspace::new(document(MediaKind::Pdf));
        ws.begin_tool_request(ToolKind::Quiz).unwrap();
        ws.teardown();
        assert_eq!(
            ws.complete_tool_request(quiz(1)).unwrap_err(),
            WorkspaceError::TornDown
        );
        assert_eq!(ws.active_tool_kind(), None);
    }

    #[test]
    fn tags_round_trip_and_reject_unknown() {
        for tab in [
            ContentTab::Summary,
            ContentTab::Concepts,
            ContentTab::Text,
            ContentTab::Transcript,
            ContentTab::Tools,
        ] {
            assert_eq!(tab.as_str().parse::<ContentTab>().unwrap(), tab);
        }
        assert_eq!(
            "slides".parse::<ContentTab>().unwrap_err(),
            WorkspaceError::UnknownTab("slides".into())
        );
        assert_eq!("quiz".parse::<ToolKind>().unwrap(), ToolKind::Quiz);
        assert!("mindmap".parse::<ToolKind>().is_err());
    }
}
