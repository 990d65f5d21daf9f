use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{DocumentId, QuestionId, QuizId};

/// One generated multiple-choice question.
///
/// `correct_answer_index` is kept signed and unchecked: the generator is an
/// external collaborator and may send an index that matches no option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer_index: i64,
}

impl Question {
    /// The correct option, if the index points at one.
    #[must_use]
    pub fn correct_option(&self) -> Option<usize> {
        usize::try_from(self.correct_answer_index)
            .ok()
            .filter(|idx| *idx < self.options.len())
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_option() == Some(option)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub document_id: DocumentId,
    #[serde(default, deserialize_with = "crate::model::wire::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}
