use study_core::study::FlashcardViewer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub title: String,
    pub progress_label: String,
    pub term: String,
    pub definition: String,
    pub flipped: bool,
    pub can_prev: bool,
    pub can_next: bool,
}

impl FlashcardVm {
    #[must_use]
    pub fn from_viewer(title: &str, viewer: &FlashcardViewer) -> Self {
        let card = viewer.current_card();
        Self {
            title: title.to_string(),
            progress_label: format!("{} / {}", viewer.current_index() + 1, viewer.len()),
            term: card.term.clone(),
            definition: card.definition.clone(),
            flipped: viewer.is_flipped(),
            can_prev: viewer.can_prev(),
            can_next: viewer.can_next(),
        }
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.flipped {
            "flashcard flashcard--flipped"
        } else {
            "flashcard"
        }
    }
}
