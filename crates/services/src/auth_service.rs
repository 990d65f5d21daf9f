use std::sync::Arc;

use tracing::info;

use study_core::model::{Credentials, Language, RegistrationDraft, UserProfile};

use crate::api::StudyApi;
use crate::auth_session::AuthSession;
use crate::error::AuthServiceError;

/// Sign-in, sign-up and sign-out against the backend.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn StudyApi>,
    session: AuthSession,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>, session: AuthSession) -> Self {
        Self { api, session }
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Exchange credentials for a token and keep it in the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Account` for blank fields (nothing is sent).
    /// Returns `AuthServiceError::Api` if the backend rejects the login.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthServiceError> {
        let credentials = Credentials::new(email, password)?;
        let token = self.api.login(&credentials).await?;
        self.session.store(token);
        info!("signed in");
        Ok(())
    }

    /// Create an account. The caller signs in separately afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Account` for blank fields or mismatched
    /// passwords, and `AuthServiceError::Api` if the backend refuses.
    pub async fn register(
        &self,
        draft: &RegistrationDraft,
        language: Language,
    ) -> Result<UserProfile, AuthServiceError> {
        let registration = draft.validate(language)?;
        let profile = self.api.register(&registration).await?;
        info!(user = %profile.id, "registered account");
        Ok(profile)
    }

    /// Forget the token. Returns whether a user was signed in.
    pub fn logout(&self) -> bool {
        let was_signed_in = self.session.clear();
        if was_signed_in {
            info!("signed out");
        }
        was_signed_in
    }
}
