use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

/// Product lifecycle status
///
/// The intended progression is draft → active → archive. Only exact
/// lowercase values are recognized on input; anything else resolves to the
/// draft default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "product_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductStatus {
    /// Not yet visible to buyers
    #[default]
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Published and purchasable
    #[sea_orm(string_value = "active")]
    Active,
    /// Retired from the storefront
    #[sea_orm(string_value = "archive")]
    Archive,
}

impl ProductStatus {
    /// Resolve a raw payload value.
    ///
    /// An absent or unrecognized status is never an error: it resolves to
    /// [`ProductStatus::Draft`].
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "archive" => Ok(Self::Archive),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

/// A single selectable value within an option (e.g. "red")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OptionItem {
    /// Unique identifier within the owning option
    pub item_id: i64,
    /// Item display name
    pub item_name: String,
}

/// A named axis of product variation (e.g. "color") with its ordered items
///
/// Item order is preserved from the creation payload and drives the order in
/// which variants are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductOption {
    /// Unique identifier within the owning product
    pub options_id: i64,
    /// Option display name
    pub option_name: String,
    /// Ordered items of this option (never empty)
    pub items: Vec<OptionItem>,
}

/// A concrete purchasable combination of item choices with its own price and stock
///
/// The option1..option3 slots are filled positionally by the order options
/// were declared on the product; a simple product's single variant has all
/// three slots absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Variant {
    /// Unique identifier
    pub variant_id: i64,
    /// Owning product
    pub product_id: i64,
    /// Selling price (uniform across variants at creation time)
    pub price: f64,
    /// Units in stock
    pub stock: i32,
    /// Chosen item of the first declared option
    pub option1: Option<i64>,
    /// Chosen item of the second declared option
    pub option2: Option<i64>,
    /// Chosen item of the third declared option
    pub option3: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Absent until the variant is first modified
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product aggregate root
///
/// Exclusively owns its options and variants; the whole aggregate is created
/// atomically. Timestamps and other absent fields serialize as null — the
/// wire contract requires every key to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub product_id: i64,
    /// Product display name
    pub product_name: String,
    /// Optional description, stored verbatim (may contain markup)
    pub description: Option<String>,
    /// Lifecycle status
    pub status: ProductStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Absent until the product is first modified
    pub updated_at: Option<DateTime<Utc>>,
    /// Set when the product is created with active status
    pub published_at: Option<DateTime<Utc>>,
    /// Declared options; absent for a simple product
    pub options: Option<Vec<ProductOption>>,
    /// Generated variants (never empty)
    pub variants: Vec<Variant>,
    /// Media attaches to an existing product through a separate workflow;
    /// always absent immediately after creation
    pub media: Option<serde_json::Value>,
}

/// Response envelope: the HTTP layer wraps the aggregate under "product"
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub product: Product,
}

/// DTO for declaring an option in a creation payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOption {
    #[validate(length(min = 1))]
    pub option_name: String,
    /// Ordered item names (at least one)
    #[validate(length(min = 1))]
    pub items: Vec<String>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub product_name: String,
    pub description: Option<String>,
    /// Raw status value; anything but draft/active/archive resolves to draft
    pub status: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// Up to three options; absent or empty means a simple product
    #[validate(length(max = 3), nested)]
    pub options: Option<Vec<CreateOption>>,
}

/// Creation input with all defaults applied.
///
/// Resolved exactly once at the start of the create operation so the default
/// values live in one place: price 0, stock 0, status draft, no options.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub product_name: String,
    pub description: Option<String>,
    pub status: ProductStatus,
    pub price: f64,
    pub stock: i32,
    /// Empty for a simple product
    pub options: Vec<NewOption>,
}

/// A resolved option declaration
#[derive(Debug, Clone, PartialEq)]
pub struct NewOption {
    pub option_name: String,
    pub items: Vec<String>,
}

impl NewProduct {
    /// Apply the documented defaults to a validated payload.
    pub fn resolve(input: CreateProduct) -> Self {
        Self {
            product_name: input.product_name,
            description: input.description,
            status: ProductStatus::resolve(input.status.as_deref()),
            price: input.price.unwrap_or(0.0),
            stock: input.stock.unwrap_or(0),
            options: input
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|o| NewOption {
                    option_name: o.option_name,
                    items: o.items,
                })
                .collect(),
        }
    }

    /// A simple product declares no options and gets exactly one variant.
    pub fn is_simple(&self) -> bool {
        self.options.is_empty()
    }
}
