//! Use case input commands.

use std::fmt;

use serde::Deserialize;

/// Input for user registration.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl RegisterUserCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Don't expose the plaintext password in debug output
impl fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
