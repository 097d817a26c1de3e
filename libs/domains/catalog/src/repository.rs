use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{NewProduct, OptionItem, Product, ProductOption, ProductStatus, Variant};
use crate::variants;

/// Repository trait for the product aggregate.
///
/// Creation persists the whole aggregate — product, options, items and the
/// generated variants — as a single unit: either all of it exists afterwards
/// or none of it does. Id generation belongs to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persist a resolved product aggregate, generating its variant set.
    async fn create(&self, input: NewProduct) -> CatalogResult<Product>;

    /// Get a product aggregate by id.
    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>>;
}

/// In-memory implementation of CatalogRepository (for development/testing)
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    sequence: AtomicI64,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // One shared sequence keeps ids unique across products, options, items
    // and variants, mirroring database-generated keys
    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn create(&self, input: NewProduct) -> CatalogResult<Product> {
        let now = Utc::now();
        let product_id = self.next_id();

        let built_options: Vec<ProductOption> = input
            .options
            .iter()
            .map(|o| ProductOption {
                options_id: self.next_id(),
                option_name: o.option_name.clone(),
                items: o
                    .items
                    .iter()
                    .map(|item_name| OptionItem {
                        item_id: self.next_id(),
                        item_name: item_name.clone(),
                    })
                    .collect(),
            })
            .collect();

        let slots = variants::combinations(&built_options)?;
        let generated: Vec<Variant> = slots
            .into_iter()
            .map(|[option1, option2, option3]| Variant {
                variant_id: self.next_id(),
                product_id,
                price: input.price,
                stock: input.stock,
                option1,
                option2,
                option3,
                created_at: now,
                updated_at: None,
            })
            .collect();

        let product = Product {
            product_id,
            product_name: input.product_name,
            description: input.description,
            status: input.status,
            created_at: now,
            updated_at: None,
            published_at: (input.status == ProductStatus::Active).then_some(now),
            options: (!built_options.is_empty()).then_some(built_options),
            variants: generated,
            media: None,
        };

        let mut products = self.products.write().await;
        products.insert(product_id, product.clone());

        tracing::info!(
            product_id,
            variant_count = product.variants.len(),
            "Created product"
        );
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewOption;

    fn simple_input(name: &str) -> NewProduct {
        NewProduct {
            product_name: name.to_string(),
            description: None,
            status: ProductStatus::Draft,
            price: 0.0,
            stock: 0,
            options: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_and_get_simple_product() {
        let repo = InMemoryCatalogRepository::new();

        let product = repo.create(simple_input("Test Product")).await.unwrap();
        assert_eq!(product.product_name, "Test Product");
        assert!(product.options.is_none());
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].option1, None);
        assert_eq!(product.variants[0].option2, None);
        assert_eq!(product.variants[0].option3, None);

        let fetched = repo.get_by_id(product.product_id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap(), product);
    }

    #[tokio::test]
    async fn test_create_variable_product_generates_cartesian_product() {
        let repo = InMemoryCatalogRepository::new();

        let mut input = simple_input("Test Product");
        input.price = 25.0;
        input.stock = 3;
        input.options = vec![
            NewOption {
                option_name: "color".to_string(),
                items: vec!["red".to_string(), "green".to_string()],
            },
            NewOption {
                option_name: "size".to_string(),
                items: vec!["M".to_string(), "S".to_string()],
            },
        ];

        let product = repo.create(input).await.unwrap();

        let options = product.options.as_ref().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].option_name, "color");
        assert_eq!(options[0].items[0].item_name, "red");

        assert_eq!(product.variants.len(), 4);
        for variant in &product.variants {
            assert_eq!(variant.price, 25.0);
            assert_eq!(variant.stock, 3);
            assert_eq!(variant.product_id, product.product_id);
            assert!(variant.option1.is_some());
            assert!(variant.option2.is_some());
            assert!(variant.option3.is_none());
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_records() {
        let repo = InMemoryCatalogRepository::new();

        let mut input = simple_input("Test Product");
        input.options = vec![NewOption {
            option_name: "color".to_string(),
            items: vec!["red".to_string()],
        }];

        let product = repo.create(input).await.unwrap();
        let option = &product.options.as_ref().unwrap()[0];

        let mut ids = vec![product.product_id, option.options_id];
        ids.extend(option.items.iter().map(|i| i.item_id));
        ids.extend(product.variants.iter().map(|v| v.variant_id));

        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_none() {
        let repo = InMemoryCatalogRepository::new();
        let fetched = repo.get_by_id(4242).await.unwrap();
        assert!(fetched.is_none());
    }
}
