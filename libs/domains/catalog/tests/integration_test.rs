//! Integration tests for the catalog domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The aggregate is persisted and re-assembled correctly
//! - The generated variant set matches the cartesian product of the options
//! - Ordering (options, items, variants) follows creation order
//! - The creation transaction is all-or-nothing

use domain_catalog::*;
use std::collections::HashSet;
use test_utils::{TestDatabase, assertions::*};

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

fn option(name: &str, items: &[&str]) -> NewOption {
    NewOption {
        option_name: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_simple_product() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("Integration Product");
    input.description = Some("<p>test description</p>".to_string());
    input.price = 25.0;
    input.stock = 3;

    let created = repo.create(input).await.unwrap();

    assert!(created.product_id > 0);
    assert_eq!(created.product_name, "Integration Product");
    assert_eq!(created.description.as_deref(), Some("<p>test description</p>"));
    assert_eq!(created.status, ProductStatus::Draft);
    assert!(created.updated_at.is_none());
    assert!(created.published_at.is_none());
    assert!(created.options.is_none());
    assert!(created.media.is_none());
    assert_eq!(created.variants.len(), 1);
    assert_eq!(created.variants[0].price, 25.0);
    assert_eq!(created.variants[0].stock, 3);

    let retrieved = repo.get_by_id(created.product_id).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
async fn test_create_active_product_sets_published_at() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("Published Product");
    input.status = ProductStatus::Active;

    let created = repo.create(input).await.unwrap();
    assert_eq!(created.status, ProductStatus::Active);
    assert!(created.published_at.is_some());
    assert!(created.updated_at.is_none());

    let retrieved = repo.get_by_id(created.product_id).await.unwrap().unwrap();
    assert!(retrieved.published_at.is_some());
}

#[tokio::test]
async fn test_variable_product_generates_full_cartesian_product() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("Variable Product");
    input.price = 25.0;
    input.stock = 3;
    input.options = vec![
        option("color", &["red", "green"]),
        option("material", &["Cotton", "Nylon"]),
        option("size", &["M", "S"]),
    ];

    let created = repo.create(input).await.unwrap();

    let options = created.options.as_ref().expect("options should be present");
    assert_eq!(options.len(), 3);

    // Declaration order and item order are preserved
    assert_eq!(options[0].option_name, "color");
    assert_eq!(options[1].option_name, "material");
    assert_eq!(options[2].option_name, "size");
    let item_names: Vec<_> = options[0].items.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(item_names, vec!["red", "green"]);

    // 2 x 2 x 2 = 8 variants, each combination exactly once
    assert_eq!(created.variants.len(), 8);

    let valid_ids: [HashSet<i64>; 3] = [
        options[0].items.iter().map(|i| i.item_id).collect(),
        options[1].items.iter().map(|i| i.item_id).collect(),
        options[2].items.iter().map(|i| i.item_id).collect(),
    ];

    let mut seen = HashSet::new();
    for variant in &created.variants {
        let tuple = (variant.option1, variant.option2, variant.option3);
        assert!(seen.insert(tuple), "duplicate combination: {:?}", tuple);

        // Slots are filled positionally with valid item ids
        assert!(valid_ids[0].contains(&variant.option1.unwrap()));
        assert!(valid_ids[1].contains(&variant.option2.unwrap()));
        assert!(valid_ids[2].contains(&variant.option3.unwrap()));

        assert_eq!(variant.price, 25.0);
        assert_eq!(variant.stock, 3);
        assert_eq!(variant.product_id, created.product_id);
        assert!(variant.updated_at.is_none());
    }
}

#[tokio::test]
async fn test_single_option_single_item_yields_one_variant() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("One Item Product");
    input.options = vec![option("color", &["red"])];

    let created = repo.create(input).await.unwrap();

    let options = created.options.as_ref().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].items.len(), 1);

    assert_eq!(created.variants.len(), 1);
    assert_eq!(created.variants[0].option1, Some(options[0].items[0].item_id));
    assert_eq!(created.variants[0].option2, None);
    assert_eq!(created.variants[0].option3, None);
}

#[tokio::test]
async fn test_asymmetric_option_sizes() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("Asymmetric Product");
    input.options = vec![
        option("color", &["red", "green", "blue"]),
        option("size", &["M", "S"]),
    ];

    let created = repo.create(input).await.unwrap();

    // 3 x 2 = 6 variants
    assert_eq!(created.variants.len(), 6);

    let tuples: HashSet<_> = created
        .variants
        .iter()
        .map(|v| (v.option1, v.option2, v.option3))
        .collect();
    assert_eq!(tuples.len(), 6);
    assert!(created.variants.iter().all(|v| v.option3.is_none()));
}

#[tokio::test]
async fn test_get_returns_creation_order() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let mut input = simple_input("Ordered Product");
    input.options = vec![option("size", &["XL", "M", "S"])];

    let created = repo.create(input).await.unwrap();
    let retrieved = repo.get_by_id(created.product_id).await.unwrap().unwrap();

    // Items come back in payload order, not sorted
    let item_names: Vec<_> = retrieved.options.as_ref().unwrap()[0]
        .items
        .iter()
        .map(|i| i.item_name.as_str())
        .collect();
    assert_eq!(item_names, vec!["XL", "M", "S"]);

    // Variants come back in generation order
    let created_ids: Vec<_> = created.variants.iter().map(|v| v.variant_id).collect();
    let retrieved_ids: Vec<_> = retrieved.variants.iter().map(|v| v.variant_id).collect();
    assert_eq!(created_ids, retrieved_ids);
}

#[tokio::test]
async fn test_get_missing_product_returns_none() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());

    let retrieved = repo.get_by_id(424242).await.unwrap();
    assert!(retrieved.is_none());
}

// ============================================================================
// Service Tests
// ============================================================================

#[tokio::test]
async fn test_service_validation() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());
    let service = CatalogService::new(repo);

    // Empty name should fail
    let input = CreateProduct {
        product_name: String::new(),
        description: None,
        status: None,
        price: None,
        stock: None,
        options: None,
    };
    let result = service.create_product(input).await;
    assert!(
        matches!(result, Err(CatalogError::Validation(_))),
        "empty name should fail validation"
    );

    // Negative price should fail
    let input = CreateProduct {
        product_name: "Test Product".to_string(),
        description: None,
        status: None,
        price: Some(-25.0),
        stock: None,
        options: None,
    };
    let result = service.create_product(input).await;
    assert!(
        matches!(result, Err(CatalogError::Validation(_))),
        "negative price should fail validation"
    );
}

#[tokio::test]
async fn test_failed_creation_persists_nothing() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());
    let service = CatalogService::new(repo);

    // An option with no items fails validation before anything is written
    let input = CreateProduct {
        product_name: "Phantom Product".to_string(),
        description: None,
        status: None,
        price: None,
        stock: None,
        options: Some(vec![CreateOption {
            option_name: "color".to_string(),
            items: vec![],
        }]),
    };

    let result = service.create_product(input).await;
    assert!(matches!(result, Err(CatalogError::Validation(_))));

    // No partial product exists
    use sea_orm::EntityTrait;
    let products = domain_catalog::entity::product::Entity::find()
        .all(&db.connection())
        .await
        .unwrap();
    assert!(
        products.iter().all(|p| p.product_name != "Phantom Product"),
        "no partial product may be persisted after a failed create"
    );
}

#[tokio::test]
async fn test_concurrent_creates() {
    let db = TestDatabase::new().await;

    let mut handles = vec![];
    for i in 0..5 {
        let repo = PgCatalogRepository::new(db.connection());

        let handle = tokio::spawn(async move {
            let mut input = simple_input(&format!("Concurrent Product {}", i));
            input.options = vec![option("color", &["red", "green"])];
            repo.create(input).await
        });

        handles.push(handle);
    }

    let results: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.len(), 5);
    let mut product_ids = HashSet::new();
    for result in results {
        let product = result.expect("concurrent create should succeed");
        assert_eq!(product.variants.len(), 2);
        assert!(product_ids.insert(product.product_id), "ids must be unique");
    }
}
