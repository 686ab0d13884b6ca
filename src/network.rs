//! Network URL constants for the tradeboard backend.

/// Default REST API base URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Signup base URL. The signup page has always posted to this fixed local
/// address instead of the configured server URL; it stays a separate
/// setting so the two can diverge.
pub const DEFAULT_SIGNUP_URL: &str = "http://localhost:3000";
