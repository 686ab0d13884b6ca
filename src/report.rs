//! Error reporting: one channel for everything a view wants the user to see
//! outside its inline messages.
//!
//! Inline form errors stay on the view. Everything else (a failed login
//! request, a signup confirmation, a failed order call) goes through a
//! [`Reporter`] with a [`Severity`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.report(Severity::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(Severity::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Severity::Error, message);
    }
}

/// Forwards reports to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "tradeboard::report", "{}", message),
            Severity::Warning => tracing::warn!(target: "tradeboard::report", "{}", message),
            Severity::Error => tracing::error!(target: "tradeboard::report", "{}", message),
        }
    }
}
