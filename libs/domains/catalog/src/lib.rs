//! Catalog Domain
//!
//! This module provides the product catalog: simple and variable products
//! with deterministic variant generation.
//!
//! A *simple* product has no options and exactly one variant. A *variable*
//! product declares up to three named options (e.g. color, material, size),
//! and gets one variant per combination of option items — the full cartesian
//! product, generated at creation time together with the rest of the
//! aggregate.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, default resolution
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, variant generation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryCatalogRepository,
//!     service::CatalogService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryCatalogRepository::new();
//! let service = CatalogService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod variants;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateOption, CreateProduct, NewOption, NewProduct, OptionItem, Product, ProductOption,
    ProductResponse, ProductStatus, Variant,
};
pub use postgres::PgCatalogRepository;
pub use repository::{CatalogRepository, InMemoryCatalogRepository};
pub use service::CatalogService;
