//! Authentication seam
//!
//! The login form hands its input to an [`Authenticator`] and receives an
//! [`AuthOutcome`]. No implementation here talks to a network; a real
//! credential check plugs in by implementing the trait.

use serde::Serialize;

use crate::config::AuthSettings;
use gatehouse_core::prelude::*;

/// What the form submits
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Credentials {
    /// Copy safe to write to logs
    pub fn redacted(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: "****".to_string(),
            remember_me: self.remember_me,
        }
    }
}

// Passwords never reach Debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"****")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// `{ ok: true }`
    Accepted,
    /// `{ ok: false, reason }`
    Rejected { reason: String },
}

impl AuthOutcome {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Credential verification backend
#[trait_variant::make(Authenticator: Send)]
pub trait LocalAuthenticator {
    /// Verify the submitted credentials
    async fn authenticate(&self, credentials: Credentials) -> AuthOutcome;
}

/// Stub backend: prints the submitted input to the log and accepts it
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleAuthenticator;

impl Authenticator for ConsoleAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> AuthOutcome {
        match serde_json::to_string(&credentials.redacted()) {
            Ok(json) => info!("Login submitted: {}", json),
            Err(e) => warn!("Failed to serialize login input: {}", e),
        }
        AuthOutcome::Accepted
    }
}

/// Stub backend that refuses every attempt with a fixed reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectingAuthenticator {
    pub reason: String,
}

impl RejectingAuthenticator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Authenticator for RejectingAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> AuthOutcome {
        debug!("Rejecting login for {}", credentials.email);
        AuthOutcome::rejected(self.reason.clone())
    }
}

/// Backend chosen from `[auth]` settings
#[derive(Debug, Clone)]
pub enum ConfiguredAuthenticator {
    Console(ConsoleAuthenticator),
    Rejecting(RejectingAuthenticator),
}

impl ConfiguredAuthenticator {
    pub fn from_settings(settings: &AuthSettings) -> Self {
        match settings.reject_reason.as_deref() {
            Some(reason) if !reason.trim().is_empty() => {
                Self::Rejecting(RejectingAuthenticator::new(reason))
            }
            _ => Self::Console(ConsoleAuthenticator),
        }
    }
}

impl Authenticator for ConfiguredAuthenticator {
    async fn authenticate(&self, credentials: Credentials) -> AuthOutcome {
        match self {
            Self::Console(inner) => Authenticator::authenticate(inner, credentials).await,
            Self::Rejecting(inner) => Authenticator::authenticate(inner, credentials).await,
        }
    }
}
