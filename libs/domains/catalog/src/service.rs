use std::sync::Arc;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProduct, NewProduct, Product};
use crate::repository::CatalogRepository;
use crate::variants::MAX_OPTION_SLOTS;

/// Service layer for catalog business logic
#[derive(Clone)]
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product with its full variant set.
    ///
    /// Validates the payload, applies the documented defaults (price 0,
    /// stock 0, status draft) exactly once, then hands the resolved input to
    /// the repository, which persists the aggregate atomically.
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<Product> {
        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let input = NewProduct::resolve(input);
        check_option_shape(&input)?;

        self.repository.create(input).await
    }

    /// Get a product by id.
    pub async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }
}

/// Reject option sets the variant generator cannot encode.
///
/// The wire DTO enforces the same constraints for HTTP callers; this keeps
/// direct service callers honest too.
fn check_option_shape(input: &NewProduct) -> CatalogResult<()> {
    if input.options.len() > MAX_OPTION_SLOTS {
        return Err(CatalogError::Validation(format!(
            "A product supports at most {} options, got {}",
            MAX_OPTION_SLOTS,
            input.options.len()
        )));
    }

    for option in &input.options {
        if option.option_name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "option_name must not be blank".to_string(),
            ));
        }
        if option.items.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Option '{}' has no items",
                option.option_name
            )));
        }
        if option.items.iter().any(|item| item.trim().is_empty()) {
            return Err(CatalogError::Validation(format!(
                "Option '{}' has a blank item name",
                option.option_name
            )));
        }
    }

    Ok(())
}
