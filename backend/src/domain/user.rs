//! User profile records.

use serde::Serialize;

/// Public profile of a registered user.
///
/// ## Invariants
/// - `id` is unique within the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    id: u32,
    username: String,
    email: String,
}

impl UserProfile {
    /// Build a profile from its parts.
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Numeric user identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Login handle.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
