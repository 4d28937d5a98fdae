//! Email → credential lookup.
//!
//! The directory is injected configuration, not global state, so it can be
//! swapped for a real identity provider without touching callers.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::info;

use crate::error::AuthError;

/// A stored credential record.
#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub password: String,
    pub display_name: String,
}

/// Mapping from login email to credential record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialDirectory {
    users: HashMap<String, Credential>,
}

/// A successfully authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub display_name: String,
}

impl CredentialDirectory {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Credential)>) -> Self {
        Self {
            users: entries.into_iter().collect(),
        }
    }

    /// Built-in accounts used until an external directory is wired in.
    pub fn seeded() -> Self {
        Self::from_entries([
            (
                "gabriel@aperdata.com".to_string(),
                Credential {
                    password: "gabriel123".to_string(),
                    display_name: "Administrador".to_string(),
                },
            ),
            (
                "maria@psicoiapro.com".to_string(),
                Credential {
                    password: "maria123".to_string(),
                    display_name: "Maria Silva".to_string(),
                },
            ),
            (
                "joao@psicoiapro.com".to_string(),
                Credential {
                    password: "joao123".to_string(),
                    display_name: "João Santos".to_string(),
                },
            ),
        ])
    }

    /// Check an email + password pair against the directory.
    ///
    /// No lockout and no throttling; every failure is the same generic
    /// [`AuthError::InvalidCredentials`].
    pub fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let credential = self.users.get(email).ok_or(AuthError::InvalidCredentials)?;
        if credential.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        info!(email, "login accepted");

        Ok(AuthenticatedUser {
            email: email.to_string(),
            display_name: credential.display_name.clone(),
        })
    }
}
