//! Reporter that keeps everything it is given.

use parking_lot::Mutex;

use crate::report::{Reporter, Severity};

#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(Severity, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.reports.lock().clone()
    }

    /// Messages reported at exactly `severity`.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.reports
            .lock()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.reports.lock().push((severity, message.to_string()));
    }
}
