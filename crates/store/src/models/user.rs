//! Dashboard user domain types.
//!
//! Passwords are stored and compared in plain text. That is an explicit
//! property of the demo (there is no real credential store behind it),
//! not an oversight; see the repository README before reusing any of
//! this for production authentication.

use serde::{Deserialize, Serialize};

use aura_core::{Email, UserId, UserRole};

/// A dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address; unique case-insensitively.
    pub email: Email,
    /// Plaintext password (demo scope).
    pub password: String,
    /// Permission level.
    pub role: UserRole,
}

/// Persisted row shape for users.
///
/// Rows written before roles existed lack the `role` field; decoding goes
/// through this type so [`crate::db::users::UserRepository`] can migrate
/// legacy rows to the current shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserRow {
    pub id: UserId,
    pub email: Email,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password: user.password,
            role: Some(user.role),
        }
    }
}
