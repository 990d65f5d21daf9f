use dioxus::prelude::*;
use services::FailureKind;

use crate::i18n::Text;

/// View-local failure, copied into signals and rendered inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Validation,
    Unauthenticated,
    Network,
    Payload,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub const fn from_kind(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Validation => Self::Validation,
            FailureKind::Authentication => Self::Unauthenticated,
            FailureKind::Network => Self::Network,
            FailureKind::Payload => Self::Payload,
        }
    }

    #[must_use]
    pub const fn text(self) -> Text {
        match self {
            Self::Validation => Text::ErrorValidation,
            Self::Unauthenticated => Text::ErrorSession,
            Self::Network => Text::ErrorNetwork,
            Self::Payload => Text::ErrorPayload,
            Self::Unknown => Text::ErrorGeneric,
        }
    }

    /// The view cannot continue without a fresh login.
    #[must_use]
    pub const fn requires_login(self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
