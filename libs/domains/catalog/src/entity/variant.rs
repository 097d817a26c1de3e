use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM Entity for the product_variants table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_variants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub variant_id: i64,
    pub product_id: i64,
    pub price: f64,
    pub stock: i32,
    pub option1: Option<i64>,
    pub option2: Option<i64>,
    pub option3: Option<i64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::ProductId"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain Variant
impl From<Model> for crate::models::Variant {
    fn from(model: Model) -> Self {
        Self {
            variant_id: model.variant_id,
            product_id: model.product_id,
            price: model.price,
            stock: model.stock,
            option1: model.option1,
            option2: model.option2,
            option3: model.option3,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}
