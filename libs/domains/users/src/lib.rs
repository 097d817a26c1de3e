//! Users Domain
//!
//! User account records: creation and lookup by id or email. The catalog is
//! the interesting part of this system; this domain is deliberately plain
//! CRUD with the same layering as the catalog domain (handlers → service →
//! repository → models).
//!
//! Passwords are hashed with Argon2 before they reach the repository;
//! authentication and sessions are handled elsewhere.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres_repository_impl;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, NewUser, User, UserResponse};
pub use postgres_repository_impl::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
