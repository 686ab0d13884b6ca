//! Authentication: credential wire types, forms, login/signup/validation flows.
//!
//! ## Session Model
//!
//! The backend issues an opaque bearer token from `POST /auth/login`. The SDK
//! never decodes it: the token is handed to the [`SessionStore`] carried by
//! the [`AppContext`] and attached as `Authorization: Bearer <token>` on
//! every authenticated call. `GET /auth/isValid` is the only way to learn
//! whether a stored token is still accepted.
//!
//! [`SessionStore`]: crate::session::SessionStore
//! [`AppContext`]: crate::client::AppContext

pub mod client;
pub mod form;

use serde::{Deserialize, Serialize};

pub use form::{LoginForm, SignupForm};

/// Minimum password length enforced by the login form.
pub const MIN_PASSWORD_LEN: usize = 5;

// ============================================================================
// Wire types
// ============================================================================

/// Login request body sent to `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response from the backend.
///
/// A 2xx answer without a usable token means the credentials were rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// The issued token, ignoring empty strings.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Signup request body sent to `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

// ============================================================================
// Validation
// ============================================================================

/// Basic email shape check: `local@domain.tld`.
///
/// Accepts exactly what `^[^\s@]+@[^\s@]+\.[^\s@]+$` accepts in an
/// ECMAScript engine: no [`is_regex_space`] characters, a single `@` with a
/// non-empty local part, and a domain holding a `.` that is neither its first
/// nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_regex_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The ECMAScript `\s` class. Unlike [`char::is_whitespace`] it includes
/// U+FEFF and excludes U+0085.
pub fn is_regex_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Password length check used by the login form. Length is counted in
/// UTF-16 code units, so a character outside the BMP counts twice.
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}
