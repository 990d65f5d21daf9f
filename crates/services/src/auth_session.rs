use std::sync::{Arc, PoisonError, RwLock};

use study_core::model::AccessToken;

/// Shared handle on the signed-in user's bearer token.
///
/// Cloning shares the same slot, so clearing it from one collaborator (for
/// instance after a 401) signs every other holder out as well. Nothing is
/// persisted across runs.
#[derive(Clone, Debug, Default)]
pub struct AuthSession {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl AuthSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        let session = Self::new();
        session.store(token);
        session
    }

    #[must_use]
    pub fn token(&self) -> Option<AccessToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn store(&self, token: AccessToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the token. Returns whether one was present.
    pub fn clear(&self) -> bool {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
