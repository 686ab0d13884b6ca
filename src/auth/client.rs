//! Auth sub-client: signup, login, logout, session validation.

use crate::auth::{LoginRequest, SignupRequest};
use crate::client::AppContext;
use crate::error::SdkError;

/// Result of checking the stored token against the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCheck {
    /// No token stored; the backend was not contacted.
    Missing,
    /// The backend accepted the token.
    Valid(String),
    /// The backend refused the token (or could not be reached).
    Rejected,
}

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) ctx: &'a AppContext,
}

impl<'a> Auth<'a> {
    /// Register a new account. Does not log in.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), SdkError> {
        self.ctx.backend.signup(request).await?;
        tracing::info!(email = %request.email, "Account created");
        Ok(())
    }

    /// Exchange credentials for a token and store it.
    ///
    /// Returns `Ok(false)` when the backend answered without a token.
    pub async fn login(&self, request: &LoginRequest) -> Result<bool, SdkError> {
        let resp = self.ctx.backend.login(request).await?;
        match resp.token() {
            Some(token) => {
                self.ctx.session.set(token).await?;
                tracing::info!(email = %request.email, "Logged in");
                Ok(true)
            }
            None => {
                tracing::debug!(email = %request.email, "Login answered without a token");
                Ok(false)
            }
        }
    }

    /// Validate the stored token; a refused token is evicted.
    ///
    /// Single attempt: any failure, including transport errors, counts as a
    /// refusal.
    pub async fn check_session(&self) -> SessionCheck {
        let Some(token) = self.ctx.session.get().await else {
            return SessionCheck::Missing;
        };

        match self.ctx.backend.validate_token(&token).await {
            Ok(()) => SessionCheck::Valid(token),
            Err(e) => {
                tracing::debug!(error = %e, "Stored token refused");
                if let Err(e) = self.ctx.session.clear().await {
                    tracing::warn!(error = %e, "Failed to clear refused token");
                }
                SessionCheck::Rejected
            }
        }
    }

    /// Validate the stored token without touching the slot.
    pub async fn peek_session(&self) -> SessionCheck {
        let Some(token) = self.ctx.session.get().await else {
            return SessionCheck::Missing;
        };

        match self.ctx.backend.validate_token(&token).await {
            Ok(()) => SessionCheck::Valid(token),
            Err(e) => {
                tracing::debug!(error = %e, "Stored token refused");
                SessionCheck::Rejected
            }
        }
    }

    /// Forget the stored token. There is no backend logout endpoint.
    pub async fn logout(&self) -> Result<(), SdkError> {
        self.ctx.session.clear().await?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Whether a token is stored (not validated).
    pub async fn has_token(&self) -> bool {
        self.ctx.session.get().await.is_some()
    }
}
