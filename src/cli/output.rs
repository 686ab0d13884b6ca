//! Terminal output helpers.

use std::fmt::Display;

use owo_colors::OwoColorize;

use crate::report::{Reporter, Severity};

/// Print the application header with name and version.
pub fn header(title: &str) {
    println!("{} {}", "tradeboard".bold(), title.dimmed());
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

pub fn warning(message: &str) {
    eprintln!("  {} {}", "⚠".yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Loading notice for the order book; printed when loading starts.
pub fn loading(on: bool) {
    if on {
        eprintln!("  {}", "Loading...".dimmed());
    }
}

/// Sends view reports to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => success(message),
            Severity::Warning => warning(message),
            Severity::Error => error(message),
        }
    }
}
