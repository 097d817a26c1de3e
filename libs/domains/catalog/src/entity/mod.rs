//! SeaORM entities for the catalog tables.
//!
//! Four tables make up the product aggregate: `products`,
//! `product_options`, `option_items` and `product_variants`. All primary
//! keys are database-generated 64-bit auto-increment ids.

pub mod item;
pub mod option;
pub mod product;
pub mod variant;
