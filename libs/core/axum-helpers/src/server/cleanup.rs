//! Connection cleanup helpers for graceful shutdown.

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

/// Close a PostgreSQL connection pool, logging (but not propagating) errors.
///
/// Intended for use in the cleanup future passed to
/// [`create_production_app`](crate::server::create_production_app) — at
/// shutdown time there is nothing useful to do with a close error besides
/// recording it.
pub async fn close_postgres(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL connection pool closed"),
        Err(e) => warn!("Failed to close PostgreSQL connection pool: {}", e),
    }
}
