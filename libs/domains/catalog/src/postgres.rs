use async_trait::async_trait;
use chrono::Utc;
use database::BaseRepository;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::{
    entity::{item, option, product, variant},
    error::{CatalogError, CatalogResult},
    models::{NewProduct, Product, ProductOption, ProductStatus, Variant},
    repository::CatalogRepository,
    variants,
};

pub struct PgCatalogRepository {
    base: BaseRepository<product::Entity>,
}

impl PgCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_err(e: DbErr) -> CatalogError {
    CatalogError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn create(&self, input: NewProduct) -> CatalogResult<Product> {
        let now = Utc::now();

        // The aggregate appears atomically or not at all: product, options,
        // items and variants commit in one transaction
        let txn = self.base.db().begin().await.map_err(db_err)?;

        let product_model = product::ActiveModel {
            product_id: NotSet,
            product_name: Set(input.product_name.clone()),
            description: Set(input.description.clone()),
            status: Set(input.status),
            created_at: Set(now.into()),
            updated_at: Set(None),
            published_at: Set((input.status == ProductStatus::Active).then(|| now.into())),
        }
        .insert(&txn)
        .await
        .map_err(db_err)?;

        let mut built_options: Vec<ProductOption> = Vec::with_capacity(input.options.len());
        for new_option in &input.options {
            let option_model = option::ActiveModel {
                options_id: NotSet,
                product_id: Set(product_model.product_id),
                option_name: Set(new_option.option_name.clone()),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;

            let mut items = Vec::with_capacity(new_option.items.len());
            for item_name in &new_option.items {
                let item_model = item::ActiveModel {
                    item_id: NotSet,
                    option_id: Set(option_model.options_id),
                    item_name: Set(item_name.clone()),
                }
                .insert(&txn)
                .await
                .map_err(db_err)?;
                items.push(item_model.into());
            }

            built_options.push(ProductOption {
                options_id: option_model.options_id,
                option_name: option_model.option_name,
                items,
            });
        }

        // Item ids now exist, so the generator can lay out the variant rows
        let slots = variants::combinations(&built_options)?;

        let mut generated: Vec<Variant> = Vec::with_capacity(slots.len());
        for [option1, option2, option3] in slots {
            let variant_model = variant::ActiveModel {
                variant_id: NotSet,
                product_id: Set(product_model.product_id),
                price: Set(input.price),
                stock: Set(input.stock),
                option1: Set(option1),
                option2: Set(option2),
                option3: Set(option3),
                created_at: Set(now.into()),
                updated_at: Set(None),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
            generated.push(variant_model.into());
        }

        txn.commit().await.map_err(db_err)?;

        tracing::info!(
            product_id = product_model.product_id,
            variant_count = generated.len(),
            "Created product"
        );

        Ok(Product {
            product_id: product_model.product_id,
            product_name: product_model.product_name,
            description: product_model.description,
            status: product_model.status,
            created_at: product_model.created_at.into(),
            updated_at: product_model.updated_at.map(Into::into),
            published_at: product_model.published_at.map(Into::into),
            options: (!built_options.is_empty()).then_some(built_options),
            variants: generated,
            media: None,
        })
    }

    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        let Some(product_model) = self.base.find_by_id(id).await.map_err(db_err)? else {
            return Ok(None);
        };

        // Creation order == ascending id order for options, items and variants
        let option_models = option::Entity::find()
            .filter(option::Column::ProductId.eq(id))
            .order_by_asc(option::Column::OptionsId)
            .all(self.base.db())
            .await
            .map_err(db_err)?;

        let mut built_options: Vec<ProductOption> = Vec::with_capacity(option_models.len());
        for option_model in option_models {
            let items = item::Entity::find()
                .filter(item::Column::OptionId.eq(option_model.options_id))
                .order_by_asc(item::Column::ItemId)
                .all(self.base.db())
                .await
                .map_err(db_err)?
                .into_iter()
                .map(Into::into)
                .collect();

            built_options.push(ProductOption {
                options_id: option_model.options_id,
                option_name: option_model.option_name,
                items,
            });
        }

        let generated: Vec<Variant> = variant::Entity::find()
            .filter(variant::Column::ProductId.eq(id))
            .order_by_asc(variant::Column::VariantId)
            .all(self.base.db())
            .await
            .map_err(db_err)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Some(Product {
            product_id: product_model.product_id,
            product_name: product_model.product_name,
            description: product_model.description,
            status: product_model.status,
            created_at: product_model.created_at.into(),
            updated_at: product_model.updated_at.map(Into::into),
            published_at: product_model.published_at.map(Into::into),
            options: (!built_options.is_empty()).then_some(built_options),
            variants: generated,
            media: None,
        }))
    }
}
