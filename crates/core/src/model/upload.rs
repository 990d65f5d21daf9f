use thiserror::Error;

use crate::model::document::MediaKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("file name cannot be empty")]
    EmptyFileName,

    #[error("file is empty")]
    EmptyFile,

    #[error("invalid file type: {file_name}")]
    InvalidFileType { file_name: String },
}

const ACCEPTED_MIME: &[(&str, MediaKind)] = &[
    ("application/pdf", MediaKind::Pdf),
    ("audio/mpeg", MediaKind::Audio),
    ("audio/wav", MediaKind::Audio),
    ("video/mp4", MediaKind::Video),
    ("image/jpeg", MediaKind::Image),
    ("image/png", MediaKind::Image),
];

const ACCEPTED_EXTENSIONS: &[(&str, MediaKind)] = &[
    ("pdf", MediaKind::Pdf),
    ("mp3", MediaKind::Audio),
    ("wav", MediaKind::Audio),
    ("mp4", MediaKind::Video),
    ("jpg", MediaKind::Image),
    ("jpeg", MediaKind::Image),
    ("png", MediaKind::Image),
];

/// Value for the file picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.mp3,.wav,.mp4,.jpg,.jpeg,.png";

/// A file picked or dropped by the user, not yet checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Check name, size and type. MIME type wins; the extension is the fallback
    /// because pickers often report an empty or generic type.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` when the file cannot be uploaded.
    pub fn validate(self) -> Result<ValidatedUpload, UploadError> {
        let file_name = self.file_name.trim().to_string();
        if file_name.is_empty() {
            return Err(UploadError::EmptyFileName);
        }

        let media_kind = self
            .content_type
            .as_deref()
            .and_then(kind_from_mime)
            .or_else(|| kind_from_extension(&file_name))
            .ok_or_else(|| UploadError::InvalidFileType {
                file_name: file_name.clone(),
            })?;

        if self.bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }

        let content_type = self
            .content_type
            .filter(|ct| kind_from_mime(ct).is_some())
            .unwrap_or_else(|| default_mime(&file_name, media_kind).to_string());

        Ok(ValidatedUpload {
            file_name,
            content_type,
            media_kind,
            bytes: self.bytes,
        })
    }
}

/// An upload that passed client-side checks and may be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub file_name: String,
    pub content_type: String,
    pub media_kind: MediaKind,
    pub bytes: Vec<u8>,
}

fn kind_from_mime(mime: &str) -> Option<MediaKind> {
    let mime = mime.trim().to_ascii_lowercase();
    ACCEPTED_MIME
        .iter()
        .find(|(accepted, _)| *accepted == mime)
        .map(|(_, kind)| *kind)
}

fn kind_from_extension(file_name: &str) -> Option<MediaKind> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .find(|(accepted, _)| *accepted == ext)
        .map(|(_, kind)| *kind)
}

fn default_mime(file_name: &str, kind: MediaKind) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    match kind {
        MediaKind::Pdf => "application/pdf",
        MediaKind::Audio if lower.ends_with(".wav") => "audio/wav",
        MediaKind::Audio => "audio/mpeg",
        MediaKind::Video => "video/mp4",
        MediaKind::Image if lower.ends_with(".png") => "image/png",
        MediaKind::Image => "image/jpeg",
    }
}
