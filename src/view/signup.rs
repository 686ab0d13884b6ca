//! Signup view.

use super::{Route, ViewState};
use crate::auth::SignupForm;
use crate::client::AppContext;
use crate::error::SdkError;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful!";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

pub struct SignupView {
    ctx: AppContext,
    pub form: SignupForm,
    error: Option<String>,
    state: ViewState,
}

impl SignupView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: SignupForm::default(),
            error: None,
            state: ViewState::Ready,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Submit the form. On success the user is sent to log in; signup never
    /// stores a token.
    pub async fn submit(&mut self) -> Option<Route> {
        if !self.form.can_submit() {
            return None;
        }

        let request = match self.form.validate() {
            Ok(request) => request,
            Err(message) => {
                self.error = Some(message.to_string());
                return None;
            }
        };

        self.state = ViewState::Loading;
        match self.ctx.auth().signup(&request).await {
            Ok(()) => {
                self.ctx.reporter.info(SIGNUP_SUCCESS_MESSAGE);
                self.state = ViewState::Redirected(Route::Login);
                Some(Route::Login)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during signup");
                let message = match &e {
                    SdkError::Http(http) if http.status().is_some() => {
                        SIGNUP_FAILED_MESSAGE.to_string()
                    }
                    other => other.to_string(),
                };
                self.ctx.reporter.error(&message);
                self.state = ViewState::Failed(message);
                None
            }
        }
    }
}
