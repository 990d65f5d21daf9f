use thiserror::Error;

use crate::model::Question;
use crate::study::pacing::{PendingTransitions, QUIZ_ADVANCE_DELAY, ScheduledTransition};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz has no questions")]
    Empty,

    #[error("quiz already completed")]
    Completed,

    #[error("quiz is not completed yet")]
    NotCompleted,

    #[error("no option selected")]
    NoSelection,

    #[error("answer already revealed")]
    AlreadyRevealed,

    #[error("option {index} does not exist (question has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("cannot advance from {from:?}")]
    IllegalTransition { from: QuizPhase },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Selected,
    Revealed,
    Completed,
}

/// Outcome of `submit`, including the ticket for the paced advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub correct_option: Option<usize>,
    pub advance: ScheduledTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
}

/// What the user submitted for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected: Option<usize>,
    pub correct: bool,
}

/// Multiple-choice run over a fixed question list.
///
/// Answering → Selected → Revealed → (Answering | Completed). The score moves
/// once per question, at submit time, and `Completed` is terminal.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    selected: Option<usize>,
    revealed: bool,
    score: u32,
    completed: bool,
    answers: Vec<AnswerRecord>,
    timers: PendingTransitions,
}

impl QuizSession {
    /// # Errors
    ///
    /// Returns `QuizError::Empty` when there is nothing to ask.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            completed: false,
            timers: PendingTransitions::default(),
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else if self.revealed {
            QuizPhase::Revealed
        } else if self.selected.is_some() {
            QuizPhase::Selected
        } else {
            QuizPhase::Answering
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// True while a paced advance is waiting to fire.
    #[must_use]
    pub fn has_pending_advance(&self) -> bool {
        self.timers.is_pending()
    }

    /// Pick an option for the current question. Ignored once revealed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed` after the last question, or
    /// `QuizError::OptionOutOfRange` for an index the question does not have.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        if self.revealed {
            return Ok(());
        }
        let len = self.current_question().options.len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Reveal the current answer and score it.
    ///
    /// A question without options can be submitted empty-handed and counts as
    /// incorrect, so a malformed question never blocks the run.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Completed`, `QuizError::AlreadyRevealed` or
    /// `QuizError::NoSelection` when the transition is not allowed.
    pub fn submit(&mut self) -> Result<Submission, QuizError> {
        if self.completed {
            return Err(QuizError::Completed);
        }
        if self.revealed {
            return Err(QuizError::AlreadyRevealed);
        }
        let question = self.current_question();
        if self.selected.is_none() && !question.options.is_empty() {
            return Err(QuizError::NoSelection);
        }

        let correct_option = question.correct_option();
        let correct = self.selected.is_some_and(|option| question.is_correct(option));
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.answers.push(AnswerRecord {
            selected: self.selected,
            correct,
        });
        self.revealed = true;

        Ok(Submission {
            correct,
            correct_option,
            advance: self.timers.schedule(QUIZ_ADVANCE_DELAY),
        })
    }

    /// Move past a revealed question, completing the quiz after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::IllegalTransition` unless the current answer is revealed.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        let phase = self.phase();
        if phase != QuizPhase::Revealed {
            return Err(QuizError::IllegalTransition { from: phase });
        }
        self.timers.cancel();

        if self.current + 1 >= self.questions.len() {
            self.completed = true;
        } else {
            self.current += 1;
            self.selected = None;
            self.revealed = false;
        }
        Ok(self.phase())
    }

    /// Fire a paced advance. Returns `None` when the ticket is stale, was
    /// cancelled, or the session has been torn down.
    pub fn apply_scheduled(&mut self, ticket: ScheduledTransition) -> Option<QuizPhase> {
        if !self.timers.take(ticket) {
            return None;
        }
        self.advance().ok()
    }

    /// Drop pending timers; later tickets are ignored.
    pub fn teardown(&mut self) {
        self.timers.teardown();
    }

    /// # Errors
    ///
    /// Returns `QuizError::NotCompleted` until the last question has advanced.
    pub fn result(&self) -> Result<QuizResult, QuizError> {
        if !self.completed {
            return Err(QuizError::NotCompleted);
        }
        Ok(QuizResult {
            score: self.score,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
