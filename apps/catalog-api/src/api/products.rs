//! Product catalog routes

use axum::Router;
use domain_catalog::{CatalogService, PgCatalogRepository, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgCatalogRepository::new(state.db.clone());
    let service = CatalogService::new(repository);
    handlers::router(service)
}
