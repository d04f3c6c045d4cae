//! User identity model
//!
//! Authentication itself lives outside this crate; handlers receive an
//! already-resolved [`UserIdentity`] and the ownership guard compares ids.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// The identity of the user making a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub username: String,
}

impl UserIdentity {
    /// Create a new identity with a fresh id
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
        }
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity() {
        let user = UserIdentity::new("kaylee");
        assert_eq!(user.username, "kaylee");
        assert!(!user.id.as_uuid().is_nil());
    }

    #[test]
    fn test_serialization() {
        let user = UserIdentity::new("kaylee");
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: UserIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }
}
