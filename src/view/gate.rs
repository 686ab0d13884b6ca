//! Auth gate: run on entry to every protected view.

use super::Route;
use crate::auth::client::SessionCheck;
use crate::client::AppContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Carry on; the token was accepted.
    Pass(String),
    /// Leave the view.
    Redirect(Route),
}

/// No token: redirect without a network call. Refused token: evict it and
/// redirect. One attempt, no retry.
pub async fn guard(ctx: &AppContext) -> Gate {
    match ctx.auth().check_session().await {
        SessionCheck::Valid(token) => Gate::Pass(token),
        SessionCheck::Missing => {
            tracing::info!("No session token, redirecting to {}", Route::Login);
            Gate::Redirect(Route::Login)
        }
        SessionCheck::Rejected => {
            tracing::info!("Session token refused, redirecting to {}", Route::Login);
            Gate::Redirect(Route::Login)
        }
    }
}
