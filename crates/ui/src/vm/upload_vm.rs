use study_core::model::UploadError;

use crate::i18n::Text;
use crate::views::ViewError;

/// Where the upload widget is in its flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Ready { file_name: String },
    Uploading { file_name: String },
    Uploaded,
    Rejected(UploadError),
    Failed(ViewError),
}

impl UploadStatus {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }

    /// Move a ready file to `Uploading`. False when nothing is ready or an
    /// upload is already running, so a repeated click sends nothing.
    pub fn begin_upload(&mut self) -> bool {
        let Self::Ready { file_name } = self else {
            return false;
        };
        *self = Self::Uploading {
            file_name: std::mem::take(file_name),
        };
        true
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Ready { file_name } | Self::Uploading { file_name } => Some(file_name),
            _ => None,
        }
    }

    /// Status line under the drop zone and whether it reads as an error.
    #[must_use]
    pub fn message(&self) -> Option<(Text, bool)> {
        match self {
            Self::Idle | Self::Ready { .. } => None,
            Self::Uploading { .. } => Some((Text::Uploading, false)),
            Self::Uploaded => Some((Text::UploadSuccess, false)),
            Self::Rejected(UploadError::EmptyFile) => Some((Text::EmptyFile, true)),
            Self::Rejected(_) => Some((Text::InvalidFileType, true)),
            Self::Failed(ViewError::Unauthenticated) => Some((Text::ErrorSession, true)),
            Self::Failed(_) => Some((Text::UploadFailed, true)),
        }
    }
}
