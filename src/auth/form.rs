//! Login and signup form drafts.
//!
//! A draft holds the raw field strings exactly as typed. Validation turns a
//! draft into the request body or into the inline message the view shows.

use super::{is_valid_email, is_valid_password, LoginRequest, SignupRequest};

/// Inline message for a rejected login draft.
///
/// The enforced minimum is [`MIN_PASSWORD_LEN`](super::MIN_PASSWORD_LEN)
/// (5); the message has always said 6 and is kept verbatim.
pub const LOGIN_INVALID_MESSAGE: &str =
    "Please enter a valid email and a password with at least 6 characters";

/// Inline message for a login the backend answered without a token.
pub const LOGIN_REJECTED_MESSAGE: &str = "Email and/or password incorrect";

/// Inline message for a signup draft whose passwords differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Submit stays disabled until both fields hold something.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn validate(&self) -> Result<LoginRequest, &'static str> {
        if is_valid_email(&self.email) && is_valid_password(&self.password) {
            Ok(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(LOGIN_INVALID_MESSAGE)
        }
    }
}

/// Signup only checks that the two passwords agree. Email shape and password
/// length are left to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    pub fn validate(&self) -> Result<SignupRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH_MESSAGE);
        }
        Ok(SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            password_confirm: self.confirm_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_accepts_scenario_credentials() {
        let req = LoginForm::new("a@b.com", "secret").validate().unwrap();
        assert_eq!(req.email, "a@b.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_login_form_rejects_short_password() {
        let err = LoginForm::new("a@b.com", "abcd").validate().unwrap_err();
        assert_eq!(err, LOGIN_INVALID_MESSAGE);
    }

    #[test]
    fn test_login_form_rejects_bad_email() {
        assert!(LoginForm::new("a.b.com", "secret").validate().is_err());
    }

    #[test]
    fn test_login_can_submit_requires_both_fields() {
        assert!(!LoginForm::new("", "secret").can_submit());
        assert!(!LoginForm::new("a@b.com", "").can_submit());
        assert!(LoginForm::new("x", "y").can_submit());
    }

    #[test]
    fn test_signup_mismatch() {
        let form = SignupForm {
            name: "Ann".into(),
            email: "ann@x.io".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        };
        assert_eq!(form.validate().unwrap_err(), PASSWORD_MISMATCH_MESSAGE);
    }

    #[test]
    fn test_signup_skips_email_and_length_checks() {
        let form = SignupForm {
            name: "Ann".into(),
            email: "not-an-email".into(),
            password: "x".into(),
            confirm_password: "x".into(),
        };
        let req = form.validate().unwrap();
        assert_eq!(req.password_confirm, "x");
    }

    #[test]
    fn test_signup_can_submit() {
        let mut form = SignupForm {
            name: "Ann".into(),
            email: "ann@x.io".into(),
            password: "pw".into(),
            confirm_password: String::new(),
        };
        assert!(!form.can_submit());
        form.confirm_password = "pw".into();
        assert!(form.can_submit());
    }
}
