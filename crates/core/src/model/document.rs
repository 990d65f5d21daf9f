use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::{CourseId, DocumentId, UserId};

/// What kind of material a document holds; decides which tabs and players apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Pdf,
    Audio,
    Video,
    Image,
}

impl MediaKind {
    /// Audio and video get a player and a transcript tab instead of extracted text.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Audio | Self::Video)
    }

    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(self, Self::Image)
    }
}

/// A key term with its definition, produced by document analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub term: String,
    pub definition: String,
}

/// Result of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Analysis {
    pub summary: String,
    #[serde(default, deserialize_with = "crate::model::wire::concepts")]
    pub key_concepts: Option<Vec<Concept>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    #[serde(deserialize_with = "crate::model::wire::timestamp")]
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub media_type: MediaKind,
    #[serde(default)]
    pub extracted_text: Option<String>,
    pub language: String,
    pub owner_id: UserId,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "crate::model::wire::concepts")]
    pub key_concepts: Option<Vec<Concept>>,
}

impl Document {
    /// Replace summary and concepts with a fresh analysis.
    pub fn apply_analysis(&mut self, analysis: Analysis) {
        self.summary = Some(analysis.summary);
        self.key_concepts = analysis.key_concepts;
    }

    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Extracted text, or the transcript for audio/video.
    #[must_use]
    pub fn text(&self) -> &str {
        self.extracted_text.as_deref().unwrap_or_default()
    }

    /// Absolute URL of the original upload under the backend's `static/`
    /// mount. The filename is one encoded path segment, so `#` and `?` in
    /// user filenames stay part of the path.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `base` cannot carry a path.
    pub fn media_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("static")
            .push(&self.filename);
        Ok(url)
    }
}
