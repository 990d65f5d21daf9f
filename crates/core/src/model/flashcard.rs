use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{DeckId, DocumentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlashcardDeck {
    pub id: DeckId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Flashcard>,
    pub document_id: DocumentId,
    #[serde(default, deserialize_with = "crate::model::wire::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}
