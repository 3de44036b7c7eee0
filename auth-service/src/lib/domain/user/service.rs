use std::sync::Arc;

use async_trait::async_trait;
use auth::Role;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Stock dev users recreated by every reseed. Credentials are hashed at
/// seed time; only the hash reaches storage.
const SEED_USERS: &[(&str, &str, Role)] = &[
    ("admin", "admin", Role::Admin),
    ("budi", "budi123", Role::User),
];

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn reseed(&self) -> Result<usize, UserError> {
        let mut users = Vec::with_capacity(SEED_USERS.len());

        for (username, password, role) in SEED_USERS {
            let username = Username::new((*username).to_string())?;
            let password_hash = self
                .password_hasher
                .hash(password)
                .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

            users.push(NewUser {
                username,
                password_hash,
                role: *role,
            });
        }

        self.repository.replace_all(&users).await?;

        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn replace_all(&self, users: &[NewUser]) -> Result<(), UserError>;
        }
    }

    fn budi() -> User {
        User {
            id: UserId(2),
            username: Username::new("budi".to_string()).unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_get_user_by_username_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .withf(|username| username.as_str() == "budi")
            .times(1)
            .returning(|_| Ok(Some(budi())));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("budi".to_string()).unwrap();
        let user = service.get_user_by_username(&username).await.unwrap();
        assert_eq!(user.id, UserId(2));
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("siapa".to_string()).unwrap();
        let result = service.get_user_by_username(&username).await;
        assert!(matches!(result, Err(UserError::NotFoundByUsername(_))));
    }

    #[tokio::test]
    async fn test_reseed_hashes_credentials() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_replace_all()
            .withf(|users| {
                users.len() == 2
                    && users[0].username.as_str() == "admin"
                    && users[0].role == Role::Admin
                    && users[1].username.as_str() == "budi"
                    && users[1].role == Role::User
                    // PHC strings, never the plaintext seed passwords
                    && users.iter().all(|u| u.password_hash.starts_with("$argon2"))
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let seeded = service.reseed().await.unwrap();
        assert_eq!(seeded, 2);
    }
}
