use study_core::study::{QuizPhase, QuizSession};

/// How an answer option is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Idle => "quiz-option",
            Self::Selected => "quiz-option quiz-option--selected",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
}

/// Snapshot of a quiz session for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizVm {
    Question {
        title: String,
        progress_label: String,
        prompt: String,
        options: Vec<QuizOptionVm>,
        locked: bool,
        can_submit: bool,
    },
    Completed {
        title: String,
        score_label: String,
    },
}

impl QuizVm {
    #[must_use]
    pub fn from_session(title: &str, session: &QuizSession) -> Self {
        if let Ok(result) = session.result() {
            return Self::Completed {
                title: title.to_string(),
                score_label: format!("{} / {}", result.score, result.total),
            };
        }

        let question = session.current_question();
        let revealed = session.is_revealed();
        let selected = session.selected_option();
        let correct = question.correct_option();
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let state = if revealed && correct == Some(index) {
                    OptionState::Correct
                } else if revealed && selected == Some(index) {
                    OptionState::Incorrect
                } else if selected == Some(index) {
                    OptionState::Selected
                } else {
                    OptionState::Idle
                };
                QuizOptionVm {
                    index,
                    label: label.clone(),
                    state,
                }
            })
            .collect::<Vec<_>>();

        let can_submit = match session.phase() {
            QuizPhase::Selected => true,
            QuizPhase::Answering => question.options.is_empty(),
            QuizPhase::Revealed | QuizPhase::Completed => false,
        };

        Self::Question {
            title: title.to_string(),
            progress_label: format!("{} / {}", session.current_index() + 1, session.total()),
            prompt: question.question.clone(),
            options,
            locked: revealed,
            can_submit,
        }
    }
}
