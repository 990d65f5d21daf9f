use study_core::model::{Document, MediaKind};

use crate::vm::time_fmt::format_date;

/// A document row on the course dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentCardVm {
    pub id: u64,
    pub filename: String,
    pub uploaded_label: String,
    pub kind: MediaKind,
    pub kind_label: &'static str,
    pub analysed: bool,
}

impl From<&Document> for DocumentCardVm {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id.value(),
            filename: document.filename.clone(),
            uploaded_label: format_date(document.upload_date),
            kind: document.media_type,
            kind_label: kind_label(document.media_type),
            analysed: document.has_summary(),
        }
    }
}

#[must_use]
pub fn map_document_cards(documents: &[Document]) -> Vec<DocumentCardVm> {
    documents.iter().map(DocumentCardVm::from).collect()
}

#[must_use]
pub const fn kind_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Pdf => "PDF",
        MediaKind::Audio => "Audio",
        MediaKind::Video => "Video",
        MediaKind::Image => "Image",
    }
}
