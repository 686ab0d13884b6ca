//! Views and the router that picks between them.
//!
//! Each view owns a clone of the [`AppContext`] and reports where to go next
//! by returning a [`Route`]; nothing navigates on its own. [`open`] follows
//! those hand-offs from a starting path until a view settles.

pub mod dashboard;
pub mod gate;
pub mod login;
pub mod router;
pub mod signup;

pub use dashboard::{LoadingHook, OrderBookView};
pub use gate::{guard, Gate};
pub use login::LoginView;
pub use router::Route;
pub use signup::SignupView;

use crate::client::AppContext;
use crate::error::SdkError;

/// Hand-offs [`open`] follows before giving up.
pub const MAX_REDIRECTS: usize = 4;

/// Lifecycle of a view: `Idle → Loading → (Ready | Redirected | Failed)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready,
    Redirected(Route),
    /// Carries the reported message.
    Failed(String),
}

/// A mounted view.
pub enum Page {
    Login(LoginView),
    Signup(SignupView),
    Dashboard(OrderBookView),
}

impl Page {
    pub fn for_route(route: Route, ctx: &AppContext) -> Self {
        match route {
            Route::Login => Page::Login(LoginView::new(ctx.clone())),
            Route::Signup => Page::Signup(SignupView::new(ctx.clone())),
            Route::Dashboard => Page::Dashboard(OrderBookView::new(ctx.clone())),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Login(_) => Route::Login,
            Page::Signup(_) => Route::Signup,
            Page::Dashboard(_) => Route::Dashboard,
        }
    }

    /// Run the view's entry logic. `Some(route)` means leave for `route`.
    pub async fn mount(&mut self) -> Option<Route> {
        match self {
            Page::Login(view) => view.mount().await,
            Page::Signup(_) => None,
            Page::Dashboard(view) => view.mount().await,
        }
    }
}

/// Resolve `path` and mount its view, following redirects.
pub async fn open(ctx: &AppContext, path: &str) -> Result<Page, SdkError> {
    let mut route = Route::resolve(path)
        .ok_or_else(|| SdkError::Validation(format!("no route for {path}")))?;

    for _ in 0..=MAX_REDIRECTS {
        let mut page = Page::for_route(route, ctx);
        match page.mount().await {
            None => return Ok(page),
            Some(next) => {
                tracing::debug!(from = %route, to = %next, "Redirect");
                route = next;
            }
        }
    }

    Err(SdkError::Other(format!(
        "too many redirects opening {path}"
    )))
}
