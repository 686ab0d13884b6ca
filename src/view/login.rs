//! Login view.

use super::{Route, ViewState};
use crate::auth::client::SessionCheck;
use crate::auth::form::LOGIN_REJECTED_MESSAGE;
use crate::auth::LoginForm;
use crate::client::AppContext;

pub struct LoginView {
    ctx: AppContext,
    pub form: LoginForm,
    error: Option<String>,
    state: ViewState,
}

impl LoginView {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            form: LoginForm::default(),
            error: None,
            state: ViewState::Idle,
        }
    }

    /// Inline error under the form header.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Skip the form when a stored token is still accepted.
    ///
    /// A refused token is left in place; only protected views evict it.
    pub async fn mount(&mut self) -> Option<Route> {
        self.state = ViewState::Loading;
        match self.ctx.auth().peek_session().await {
            SessionCheck::Valid(_) => {
                self.state = ViewState::Redirected(Route::Dashboard);
                Some(Route::Dashboard)
            }
            SessionCheck::Missing | SessionCheck::Rejected => {
                self.state = ViewState::Ready;
                None
            }
        }
    }

    /// Submit the form. Returns where to go next, if anywhere.
    ///
    /// Invalid drafts never reach the backend. A transport failure is
    /// reported with its raw message; the form stays as typed.
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

        match self.ctx.auth().login(&request).await {
            Ok(true) => {
                self.state = ViewState::Redirected(Route::Dashboard);
                Some(Route::Dashboard)
            }
            Ok(false) => {
                self.error = Some(LOGIN_REJECTED_MESSAGE.to_string());
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during login");
                self.ctx.reporter.error(&e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::form::LOGIN_INVALID_MESSAGE;
    use crate::report::Severity;
    use crate::session::SessionStore;
    use crate::testkit::{self, Endpoint, Failure, FakeBackend};

    #[tokio::test]
    async fn test_malformed_email_never_calls_backend() {
        let (ctx, backend, _, _) = testkit::context(FakeBackend::new());
        let mut view = LoginView::new(ctx);
        view.form = LoginForm::new("not-an-email", "secret");

        assert_eq!(view.submit().await, None);
        assert_eq!(view.error(), Some(LOGIN_INVALID_MESSAGE));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_password_rejected_client_side() {
        let (ctx, backend, _, _) = testkit::context(FakeBackend::new());
        let mut view = LoginView::new(ctx);
        view.form = LoginForm::new("a@b.com", "1234");

        assert_eq!(view.submit().await, None);
        assert_eq!(view.error(), Some(LOGIN_INVALID_MESSAGE));
        assert_eq!(backend.calls_to(Endpoint::Login), 0);
    }

    #[tokio::test]
    async fn test_empty_field_disables_submit() {
        let (ctx, backend, _, _) = testkit::context(FakeBackend::new());
        let mut view = LoginView::new(ctx);
        view.form = LoginForm::new("a@b.com", "");

        assert_eq!(view.submit().await, None);
        assert_eq!(view.error(), None);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_shows_inline_error() {
        let backend = FakeBackend::new().with_account("a@b.com", "secret");
        let (ctx, _, session, _) = testkit::context(backend);
        let mut view = LoginView::new(ctx);
        view.form = LoginForm::new("a@b.com", "other");

        assert_eq!(view.submit().await, None);
        assert_eq!(view.error(), Some(LOGIN_REJECTED_MESSAGE));
        assert_eq!(session.get().await, None);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported() {
        let backend = FakeBackend::new();
        backend.fail(Endpoint::Login, Failure::Status(500));
        let (ctx, _, _, reporter) = testkit::context(backend);
        let mut view = LoginView::new(ctx);
        view.form = LoginForm::new("a@b.com", "secret");

        assert_eq!(view.submit().await, None);
        let errors = reporter.messages(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("500"), "{}", errors[0]);
        assert_eq!(view.error(), None);
    }

    #[tokio::test]
    async fn test_mount_with_accepted_token_goes_to_dashboard() {
        let backend = FakeBackend::new().with_valid_token("tok");
        let (ctx, _, session, _) = testkit::context(backend);
        session.set("tok").await.unwrap();

        let mut view = LoginView::new(ctx);
        assert_eq!(view.mount().await, Some(Route::Dashboard));
    }

    #[tokio::test]
    async fn test_mount_with_refused_token_stays() {
        let (ctx, _, session, _) = testkit::context(FakeBackend::new());
        session.set("stale").await.unwrap();

        let mut view = LoginView::new(ctx);
        assert_eq!(view.mount().await, None);
        assert_eq!(view.state(), &ViewState::Ready);
        assert_eq!(session.get().await.as_deref(), Some("stale"));
    }
}
