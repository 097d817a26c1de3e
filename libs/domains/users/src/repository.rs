use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; the implementation assigns the id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Get a user by id
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Get a user by email (case-insensitive)
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Check if an email already exists
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        let email_exists = users
            .values()
            .any(|u| u.email.to_lowercase() == input.email.to_lowercase());

        if email_exists {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = User {
            user_id: self.next_id(),
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            password_hash: input.password_hash,
            verified_email: false,
            date_joined: Utc::now(),
            updated_at: None,
            last_login: None,
        };

        users.insert(user.user_id, user.clone());

        tracing::info!(user_id = user.user_id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users
            .values()
            .find(|u| u.email.to_lowercase() == email.to_lowercase())
            .cloned();
        Ok(user)
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        let exists = users
            .values()
            .any(|u| u.email.to_lowercase() == email.to_lowercase());
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(new_user("test@example.com")).await.unwrap();
        assert_eq!(created.email, "test@example.com");
        assert!(created.user_id > 0);
        assert!(!created.verified_email);
        assert!(created.updated_at.is_none());
        assert!(created.last_login.is_none());

        let fetched = repo.get_by_id(created.user_id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().user_id, created.user_id);
    }

    #[tokio::test]
    async fn test_get_by_email_is_case_insensitive() {
        let repo = InMemoryUserRepository::new();

        repo.create(new_user("test@example.com")).await.unwrap();

        let fetched = repo.get_by_email("test@example.com").await.unwrap();
        assert!(fetched.is_some());

        let fetched = repo.get_by_email("TEST@EXAMPLE.COM").await.unwrap();
        assert!(fetched.is_some()); // Case insensitive
    }

    #[tokio::test]
    async fn test_duplicate_email_error() {
        let repo = InMemoryUserRepository::new();

        repo.create(new_user("test@example.com")).await.unwrap();

        let result = repo.create(new_user("test@example.com")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get_by_id(4242).await.unwrap().is_none());
        assert!(repo.get_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
