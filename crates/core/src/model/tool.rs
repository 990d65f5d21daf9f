use crate::model::flashcard::FlashcardDeck;
use crate::model::quiz::Quiz;
use crate::study::ToolKind;

/// A generated study tool as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolPayload {
    Quiz(Quiz),
    Flashcards(FlashcardDeck),
}

impl ToolPayload {
    #[must_use]
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Quiz(_) => ToolKind::Quiz,
            Self::Flashcards(_) => ToolKind::Flashcards,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Quiz(quiz) => &quiz.title,
            Self::Flashcards(deck) => &deck.title,
        }
    }
}
