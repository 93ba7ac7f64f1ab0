//! The identity that scopes which transactions are visible and mutable.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The opaque ID of the signed-in user.
///
/// The ID is assigned by the authentication provider of the store, e.g. the
/// `sub` claim of a Supabase access token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
