//! # tradeboard
//!
//! Client for a small order-matching backend: account signup, login with a
//! bearer token, and an order book where BUY/SELL orders are listed, placed
//! and executed.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Domain types, forms, wire types, errors (always available)
//! 2. **Ports**: [`Backend`](backend::Backend), [`SessionStore`](session::SessionStore),
//!    [`Reporter`](report::Reporter)
//! 3. **HTTP API**: `ApiHttp`, the reqwest implementation of `Backend`
//! 4. **Context**: [`AppContext`](client::AppContext) with nested sub-clients
//! 5. **Views**: login, signup and order book views plus the router
//! 6. **CLI**: the `tradeboard` binary
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tradeboard::prelude::*;
//!
//! let http = ApiHttp::new("http://localhost:3000", "http://localhost:3000")?;
//! let ctx = AppContext::builder()
//!     .backend(Arc::new(http))
//!     .session(Arc::new(FileSession::new("session.json")))
//!     .build()?;
//!
//! match tradeboard::view::open(&ctx, "/dashboard").await? {
//!     Page::Dashboard(view) => println!("{} orders", view.book().len()),
//!     page => println!("redirected to {}", page.route()),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Authentication: wire types, forms, login/signup/session checks.
pub mod auth;

/// Layered configuration and logging setup.
pub mod config;

// ── Layer 2: Ports ───────────────────────────────────────────────────────────

/// The REST calls the views depend on.
pub mod backend;

/// Token storage.
pub mod session;

/// User-facing error and status reporting.
pub mod report;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Context ─────────────────────────────────────────────────────────

/// `AppContext`: the handles every view receives.
pub mod client;

// ── Layer 5: Views ───────────────────────────────────────────────────────────

pub mod view;

// ── Layer 6: CLI ─────────────────────────────────────────────────────────────

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types: order
    pub use crate::domain::order::{
        NewOrder, Order, OrderBook, OrderField, OrderForm, OrderId, OrderType,
    };

    // Auth
    pub use crate::auth::client::SessionCheck;
    pub use crate::auth::{LoginForm, LoginRequest, SignupForm, SignupRequest};

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError, SessionError};

    // Network
    pub use crate::network::{DEFAULT_SERVER_URL, DEFAULT_SIGNUP_URL};

    // Ports
    pub use crate::backend::Backend;
    pub use crate::report::{Reporter, Severity, TracingReporter};
    pub use crate::session::{FileSession, MemorySession, SessionStore};

    // Context + sub-clients
    pub use crate::client::{AppContext, AppContextBuilder, AuthClient, OrdersClient};

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::http::{ApiHttp, RetryConfig, RetryPolicy};

    // Views
    pub use crate::view::{
        Gate, LoginView, OrderBookView, Page, Route, SignupView, ViewState,
    };

    pub use crate::config::Config;
}
