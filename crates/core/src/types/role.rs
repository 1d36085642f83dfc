//! Admin role enum.

use serde::{Deserialize, Serialize};

/// Role of a dashboard user.
///
/// Persisted in lowercase (`"superadmin"` / `"admin"`), matching the
/// records written by earlier versions of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access including managing other admin users.
    Superadmin,
    /// Full access to catalog management.
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Superadmin => write!(f, "superadmin"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Self::Superadmin),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Superadmin).unwrap(),
            "\"superadmin\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"admin\"").unwrap(),
            UserRole::Admin
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("superadmin".parse::<UserRole>().unwrap(), UserRole::Superadmin);
        assert!("viewer".parse::<UserRole>().is_err());
    }
}
