//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// Registered user record.
///
/// The password is kept verbatim, exactly as supplied at registration.
/// There is no hashing: anyone who can read the storage file can read every
/// password. This is a known security deficiency of the registration store,
/// kept so that stored data and authentication behave as they always have.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Exact comparison against the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes() == candidate.as_bytes()
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Username: {}, Email: {}", self.username, self.email)
    }
}

/// User response (safe to print or serialize)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique username
    pub username: String,
    /// Email address as registered
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
