//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`backend`]: `FakeBackend`, an in-memory stand-in for the REST API
//!   that records every call.
//! - [`reporter`]: `RecordingReporter`, keeps every report for assertions.

pub mod backend;
pub mod reporter;

pub use backend::{Call, Endpoint, Failure, FakeBackend};
pub use reporter::RecordingReporter;

use std::sync::Arc;

use crate::client::AppContext;
use crate::session::MemorySession;

/// Context wired to fresh fakes. Returns the pieces for assertions.
pub fn context(
    backend: FakeBackend,
) -> (AppContext, Arc<FakeBackend>, Arc<MemorySession>, Arc<RecordingReporter>) {
    let backend = Arc::new(backend);
    let session = Arc::new(MemorySession::new());
    let reporter = Arc::new(RecordingReporter::new());
    let ctx = AppContext::new(backend.clone(), session.clone(), reporter.clone());
    (ctx, backend, session, reporter)
}
