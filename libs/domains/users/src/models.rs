use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User account record - matches SQL schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier
    pub user_id: i64,
    /// User email (unique, compared case-insensitively)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the email address has been verified
    pub verified_email: bool,
    /// Account creation timestamp
    pub date_joined: DateTime<Utc>,
    /// Absent until the account is first modified
    pub updated_at: Option<DateTime<Utc>>,
    /// Absent until the user first logs in
    pub last_login: Option<DateTime<Utc>>,
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub verified_email: bool,
    pub date_joined: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            verified_email: user.verified_email,
            date_joined: user.date_joined,
            updated_at: user.updated_at,
            last_login: user.last_login,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Resolved creation input handed to the repository.
///
/// The password is already hashed by the service layer; the repository
/// assigns the id and stamps date_joined.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}
