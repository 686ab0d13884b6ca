//! Application context: the explicit bundle every view receives.
//!
//! Holds the backend, the session slot and the reporter. Sub-client accessors
//! (`ctx.auth()`, `ctx.orders()`) live in `auth/client.rs` and
//! `domain/order/client.rs`; this module keeps the builder and the shared
//! handles.

use std::sync::Arc;

use crate::auth::client::Auth;
use crate::backend::Backend;
use crate::domain::order::client::Orders;
use crate::error::SdkError;
use crate::report::{Reporter, TracingReporter};
use crate::session::{MemorySession, SessionStore};

pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::order::client::Orders as OrdersClient;

/// Shared handles passed to every view. Cloning is cheap.
#[derive(Clone)]
pub struct AppContext {
    pub(crate) backend: Arc<dyn Backend>,
    pub(crate) session: Arc<dyn SessionStore>,
    pub(crate) reporter: Arc<dyn Reporter>,
}

impl AppContext {
    pub fn new(
        backend: Arc<dyn Backend>,
        session: Arc<dyn SessionStore>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            backend,
            session,
            reporter,
        }
    }

    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { ctx: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { ctx: self }
    }

    // ── Shared handles ───────────────────────────────────────────────────

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct AppContextBuilder {
    backend: Option<Arc<dyn Backend>>,
    session: Option<Arc<dyn SessionStore>>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl AppContextBuilder {
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// The backend is required. The session defaults to an in-memory slot and
    /// the reporter to `tracing`.
    pub fn build(self) -> Result<AppContext, SdkError> {
        let backend = self
            .backend
            .ok_or_else(|| SdkError::Other("AppContext needs a backend".to_string()))?;
        Ok(AppContext {
            backend,
            session: self
                .session
                .unwrap_or_else(|| Arc::new(MemorySession::new())),
            reporter: self.reporter.unwrap_or_else(|| Arc::new(TracingReporter)),
        })
    }
}
