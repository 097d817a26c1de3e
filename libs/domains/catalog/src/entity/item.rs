use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM Entity for the option_items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "option_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub item_id: i64,
    pub option_id: i64,
    pub item_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::option::Entity",
        from = "Column::OptionId",
        to = "super::option::Column::OptionsId"
    )]
    Option,
}

impl Related<super::option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Option.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain OptionItem
impl From<Model> for crate::models::OptionItem {
    fn from(model: Model) -> Self {
        Self {
            item_id: model.item_id,
            item_name: model.item_name,
        }
    }
}
