use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create product_status enum
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductStatus::Enum)
                    .values([
                        ProductStatus::Draft,
                        ProductStatus::Active,
                        ProductStatus::Archive,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::ProductId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Products::ProductName))
                    .col(text_null(Products::Description))
                    .col(
                        ColumnDef::new(Products::Status)
                            .enumeration(
                                ProductStatus::Enum,
                                [
                                    ProductStatus::Draft,
                                    ProductStatus::Active,
                                    ProductStatus::Archive,
                                ],
                            )
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    // Stays NULL until the product is first modified
                    .col(timestamp_with_time_zone_null(Products::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Products::PublishedAt))
                    .to_owned(),
            )
            .await?;

        // Create product_options table
        manager
            .create_table(
                Table::create()
                    .table(ProductOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductOptions::OptionsId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(ProductOptions::ProductId))
                    .col(string(ProductOptions::OptionName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_options_product")
                            .from(ProductOptions::Table, ProductOptions::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create option_items table
        manager
            .create_table(
                Table::create()
                    .table(OptionItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OptionItems::ItemId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(OptionItems::OptionId))
                    .col(string(OptionItems::ItemName))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_option_items_option")
                            .from(OptionItems::Table, OptionItems::OptionId)
                            .to(ProductOptions::Table, ProductOptions::OptionsId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create product_variants table
        manager
            .create_table(
                Table::create()
                    .table(ProductVariants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductVariants::VariantId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(ProductVariants::ProductId))
                    .col(double(ProductVariants::Price).default(0))
                    .col(integer(ProductVariants::Stock).default(0))
                    .col(big_integer_null(ProductVariants::Option1))
                    .col(big_integer_null(ProductVariants::Option2))
                    .col(big_integer_null(ProductVariants::Option3))
                    .col(
                        timestamp_with_time_zone(ProductVariants::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(ProductVariants::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_variants_product")
                            .from(ProductVariants::Table, ProductVariants::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_product_options_product_id")
                    .table(ProductOptions::Table)
                    .col(ProductOptions::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_option_items_option_id")
                    .table(OptionItems::Table)
                    .col(OptionItems::OptionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_variants_product_id")
                    .table(ProductVariants::Table)
                    .col(ProductVariants::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_status")
                    .table(Products::Table)
                    .col(Products::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductVariants::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OptionItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProductOptions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductStatus::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    ProductName,
    Description,
    Status,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}

#[derive(DeriveIden)]
enum ProductOptions {
    Table,
    OptionsId,
    ProductId,
    OptionName,
}

#[derive(DeriveIden)]
enum OptionItems {
    Table,
    ItemId,
    OptionId,
    ItemName,
}

#[derive(DeriveIden)]
enum ProductVariants {
    Table,
    VariantId,
    ProductId,
    Price,
    Stock,
    Option1,
    Option2,
    Option3,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductStatus {
    #[sea_orm(iden = "product_status")]
    Enum,
    #[sea_orm(iden = "draft")]
    Draft,
    #[sea_orm(iden = "active")]
    Active,
    #[sea_orm(iden = "archive")]
    Archive,
}
