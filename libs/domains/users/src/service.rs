use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UserResponse};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user with password hashing
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let password_hash = self.hash_password(&input.password)?;

        let created = self
            .repository
            .create(NewUser {
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                password_hash,
            })
            .await?;

        Ok(created.into())
    }

    /// Get a user by id
    pub async fn get_user(&self, id: i64) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Get a user by email (case-insensitive)
    pub async fn get_user_by_email(&self, email: &str) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| UserError::EmailNotFound(email.to_string()))?;

        Ok(user.into())
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;
        Ok(hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;

    fn payload(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(repo);

        let user = service.create_user(payload("test@example.com")).await.unwrap();
        assert!(user.user_id > 0);
        assert_eq!(user.email, "test@example.com");

        // The stored hash is an argon2 hash, not the raw password
        let stored = service
            .repository
            .get_by_id(user.user_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_email() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(repo);

        let result = service.create_user(payload("not-an-email")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_rejects_short_password() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(repo);

        let mut input = payload("test@example.com");
        input.password = "short".to_string();

        let result = service.create_user(input).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflict() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(repo);

        service.create_user(payload("test@example.com")).await.unwrap();
        let result = service.create_user(payload("test@example.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let repo = InMemoryUserRepository::new();
        let service = UserService::new(repo);

        let result = service.get_user_by_email("nobody@example.com").await;
        assert!(matches!(result, Err(UserError::EmailNotFound(_))));
    }
}
