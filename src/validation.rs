//! Input validation and length limits.
//!
//! Every piece of raw text (usernames, passwords, post and message content)
//! passes through here before any structure is touched. Oversized input is
//! rejected with a distinct [`TooLong`](SmmError::TooLong) error rather than
//! silently truncated; there is no truncating copy path anywhere in the
//! crate.

use crate::error::{Result, SmmError};

/// Maximum username length in bytes.
pub const USERNAME_MAX_LEN: usize = 31;

/// Maximum password length in bytes.
pub const PASSWORD_MAX_LEN: usize = 63;

/// Maximum post/message content length in bytes.
pub const CONTENT_MAX_LEN: usize = 511;

/// Validation functions for input data.
pub struct Validator;

impl Validator {
    /// Validates a username: non-empty, at most [`USERNAME_MAX_LEN`] bytes,
    /// printable ASCII with no whitespace.
    pub fn validate_username(username: &str) -> Result<()> {
        if username.is_empty() {
            return Err(SmmError::invalid_input("username cannot be empty"));
        }
        if username.len() > USERNAME_MAX_LEN {
            return Err(SmmError::too_long(format!(
                "username is {} bytes, maximum is {}",
                username.len(),
                USERNAME_MAX_LEN
            )));
        }
        if !username.chars().all(|c| c.is_ascii_graphic()) {
            return Err(SmmError::invalid_input(
                "username must be printable with no spaces",
            ));
        }
        Ok(())
    }

    /// Validates a password: non-empty, at most [`PASSWORD_MAX_LEN`] bytes,
    /// printable ASCII (spaces allowed).
    pub fn validate_password(password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(SmmError::invalid_input("password cannot be empty"));
        }
        if password.len() > PASSWORD_MAX_LEN {
            return Err(SmmError::too_long(format!(
                "password is {} bytes, maximum is {}",
                password.len(),
                PASSWORD_MAX_LEN
            )));
        }
        if !password.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
            return Err(SmmError::invalid_input("password must be printable"));
        }
        Ok(())
    }

    /// Validates post or message content: non-empty, at most
    /// [`CONTENT_MAX_LEN`] bytes.
    pub fn validate_content(content: &str) -> Result<()> {
        if content.is_empty() {
            return Err(SmmError::invalid_input("content cannot be empty"));
        }
        if content.len() > CONTENT_MAX_LEN {
            return Err(SmmError::too_long(format!(
                "content is {} bytes, maximum is {}",
                content.len(),
                CONTENT_MAX_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Validator::validate_username("alice").is_ok());
        assert!(Validator::validate_username("a_b-c.99").is_ok());

        // Empty should fail
        assert!(Validator::validate_username("").is_err());

        // Whitespace should fail
        assert!(Validator::validate_username("al ice").is_err());
        assert!(Validator::validate_username("alice\t").is_err());

        // Control characters should fail
        assert!(Validator::validate_username("ali\x01ce").is_err());

        // Exactly at the limit passes; one over fails
        assert!(Validator::validate_username(&"a".repeat(USERNAME_MAX_LEN)).is_ok());
        let too_long = Validator::validate_username(&"a".repeat(USERNAME_MAX_LEN + 1));
        assert!(matches!(too_long, Err(SmmError::TooLong(_))));
    }

    #[test]
    fn test_password_validation() {
        assert!(Validator::validate_password("hunter2").is_ok());
        assert!(Validator::validate_password("pass with spaces").is_ok());

        assert!(Validator::validate_password("").is_err());
        assert!(Validator::validate_password("bad\x07bell").is_err());

        let too_long = Validator::validate_password(&"p".repeat(PASSWORD_MAX_LEN + 1));
        assert!(matches!(too_long, Err(SmmError::TooLong(_))));
    }

    #[test]
    fn test_content_validation() {
        assert!(Validator::validate_content("hello world").is_ok());
        assert!(Validator::validate_content("").is_err());

        assert!(Validator::validate_content(&"x".repeat(CONTENT_MAX_LEN)).is_ok());
        let too_long = Validator::validate_content(&"x".repeat(CONTENT_MAX_LEN + 1));
        assert!(matches!(too_long, Err(SmmError::TooLong(_))));
    }

    #[test]
    fn test_rejection_never_truncates() {
        // A rejected value is reported whole; nothing stores a clipped copy.
        let oversized = "y".repeat(CONTENT_MAX_LEN * 2);
        match Validator::validate_content(&oversized) {
            Err(SmmError::TooLong(msg)) => {
                assert!(msg.contains(&format!("{}", oversized.len())));
            }
            other => panic!("expected TooLong, got {other:?}"),
        }
    }
}
