use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Destructively reseed the user set with the stock dev users.
    ///
    /// Every existing user row is removed. Returns the number of seeded
    /// users.
    ///
    /// # Errors
    /// * `PasswordHashing` - Seed credential hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn reseed(&self) -> Result<usize, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Replace the entire user set with the given records, atomically.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn replace_all(&self, users: &[NewUser]) -> Result<(), UserError>;
}
