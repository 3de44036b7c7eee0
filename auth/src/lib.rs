//! Authentication utilities shared by the library services
//!
//! Provides the authentication infrastructure both services rely on:
//! - Password hashing (Argon2id)
//! - JWT session token generation and validation
//! - Authentication coordination
//!
//! auth-service issues tokens; book-service verifies them with the same
//! signing secret. The claims carry the borrower's identity and role so the
//! inventory side never needs to read the user table.
//!
//! # Examples
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Seeding: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_user(1, "budi", Role::User, 1);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token (book-service side)
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.user_id().unwrap(), 1);
//! assert_eq!(decoded.role, Role::User);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::Role;
pub use password::PasswordError;
pub use password::PasswordHasher;
