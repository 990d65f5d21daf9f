use thiserror::Error;

use crate::model::Flashcard;
use crate::study::pacing::{FLASHCARD_SETTLE_DELAY, PendingTransitions, ScheduledTransition};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("deck has no cards")]
    Empty,

    #[error("already at the first card")]
    AtFirstCard,

    #[error("already at the last card")]
    AtLastCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The index changed; the card is face up and a settle window is open.
    Moved {
        index: usize,
        settle: ScheduledTransition,
    },
    /// A previous move is still settling; the request was dropped.
    Ignored,
}

/// Steps through a flashcard deck one card at a time, no wraparound.
#[derive(Debug)]
pub struct FlashcardViewer {
    cards: Vec<Flashcard>,
    current: usize,
    flipped: bool,
    settling: PendingTransitions,
}

impl FlashcardViewer {
    /// # Errors
    ///
    /// Returns `FlashcardError::Empty` for an empty deck.
    pub fn new(cards: Vec<Flashcard>) -> Result<Self, FlashcardError> {
        if cards.is_empty() {
            return Err(FlashcardError::Empty);
        }
        Ok(Self {
            cards,
            current: 0,
            flipped: false,
            settling: PendingTransitions::default(),
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_card(&self) -> &Flashcard {
        &self.cards[self.current]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn side(&self) -> CardSide {
        if self.flipped {
            CardSide::Back
        } else {
            CardSide::Front
        }
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling.is_pending()
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.current + 1 < self.cards.len()
    }

    pub fn flip(&mut self) -> CardSide {
        self.flipped = !self.flipped;
        self.side()
    }

    /// # Errors
    ///
    /// Returns `FlashcardError::AtLastCard` at the end of the deck.
    pub fn next(&mut self) -> Result<Navigation, FlashcardError> {
        if !self.can_next() {
            return Err(FlashcardError::AtLastCard);
        }
        Ok(self.move_to(self.current + 1))
    }

    /// # Errors
    ///
    /// Returns `FlashcardError::AtFirstCard` at the start of the deck.
    pub fn prev(&mut self) -> Result<Navigation, FlashcardError> {
        if !self.can_prev() {
            return Err(FlashcardError::AtFirstCard);
        }
        Ok(self.move_to(self.current - 1))
    }

    fn move_to(&mut self, index: usize) -> Navigation {
        if self.settling.is_pending() {
            return Navigation::Ignored;
        }
        self.current = index;
        self.flipped = false;
        Navigation::Moved {
            index,
            settle: self.settling.schedule(FLASHCARD_SETTLE_DELAY),
        }
    }

    /// Close the settle window opened by a move. Stale tickets are ignored.
    pub fn settle(&mut self, ticket: ScheduledTransition) -> bool {
        self.settling.take(ticket)
    }

    pub fn teardown(&mut self) {
        self.settling.teardown();
    }
}
