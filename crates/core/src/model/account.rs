use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::UserId;
use crate::model::language::Language;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccountError {
    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("password cannot be empty")]
    EmptyPassword,

    #[error("full name cannot be empty")]
    EmptyFullName,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Login credentials, checked for blanks before they leave the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns `AccountError::EmptyEmail` or `AccountError::EmptyPassword` for blank input.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, AccountError> {
        let email = email.into().trim().to_string();
        let password = password.into();
        if email.is_empty() {
            return Err(AccountError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    /// # Errors
    ///
    /// Returns `AccountError` for blank fields or mismatched passwords.
    pub fn validate(&self, preferred_language: Language) -> Result<Registration, AccountError> {
        let full_name = self.full_name.trim().to_string();
        let email = self.email.trim().to_string();
        if full_name.is_empty() {
            return Err(AccountError::EmptyFullName);
        }
        if email.is_empty() {
            return Err(AccountError::EmptyEmail);
        }
        if self.password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }
        if self.password != self.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        Ok(Registration {
            email,
            full_name,
            password: self.password.clone(),
            preferred_language,
        })
    }
}

/// Validated registration, serialised as the backend's signup body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub preferred_language: Language,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("preferred_language", &self.preferred_language)
            .finish_non_exhaustive()
    }
}

/// Bearer token returned by the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub preferred_language: Language,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}
