use async_trait::async_trait;
use auth::Role;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, UserError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;
        let username: String = row
            .try_get("username")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let role: Role = role
            .parse()
            .map_err(|_| UserError::DatabaseError(format!("Unknown role in user row: {}", role)))?;

        Ok(User {
            id: UserId(id),
            username: Username::new(username)?,
            password_hash,
            role,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_user(&r)?)),
            None => Ok(None),
        }
    }

    async fn replace_all(&self, users: &[NewUser]) -> Result<(), UserError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        sqlx::query("TRUNCATE TABLE users RESTART IDENTITY")
            .execute(&mut *tx)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        for user in users {
            sqlx::query(
                r#"
                INSERT INTO users (username, password_hash, role)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(user.username.as_str())
            .bind(&user.password_hash)
            .bind(user.role.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
