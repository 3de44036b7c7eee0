use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Authorization role carried inside session tokens.
///
/// Admins may mutate the book catalog; regular users may only borrow,
/// return, and list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Whether this role is allowed to mutate the catalog.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Get role as string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error for role strings the token vocabulary does not know.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Session token claims.
///
/// `sub` holds the user's numeric id rendered as a string, per RFC 7519
/// convention. Possession of a validly signed, unexpired token is the only
/// authorization state the services keep; nothing is persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user id as string)
    pub sub: String,

    /// Username snapshot at issue time
    pub username: String,

    /// Authorization role
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a freshly authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - Numeric user identifier
    /// * `username` - Username snapshot
    /// * `role` - Authorization role
    /// * `expiration_hours` - Hours until the token expires
    pub fn for_user(user_id: i64, username: &str, role: Role, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Parse the numeric user id out of `sub`.
    ///
    /// # Errors
    /// * `MalformedSubject` - `sub` is not a decimal integer
    pub fn user_id(&self) -> Result<i64, MalformedSubject> {
        self.sub
            .parse()
            .map_err(|_| MalformedSubject(self.sub.clone()))
    }

    /// Check if the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

/// Error for `sub` claims that do not parse as a user id.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Malformed subject claim: {0}")]
pub struct MalformedSubject(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user(42, "budi", Role::User, 1);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "budi");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.exp - claims.iat, 60 * 60); // 1 hour
    }

    #[test]
    fn test_user_id_round_trip() {
        let claims = Claims::for_user(7, "admin", Role::Admin, 1);
        assert_eq!(claims.user_id().unwrap(), 7);
    }

    #[test]
    fn test_user_id_malformed() {
        let mut claims = Claims::for_user(7, "admin", Role::Admin, 1);
        claims.sub = "not-a-number".to_string();
        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_user(1, "budi", Role::User, 1);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("librarian".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
    }
}
