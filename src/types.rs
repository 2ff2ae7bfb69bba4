//! Payload data model shared across all rendering modules.
//!
//! The upstream data loader hands us a fully-resolved product-details
//! payload as JSON, shaped after the schema.org commerce vocabulary
//! (`Product`, `Offer`, `BreadcrumbList`). Everything here is read-only:
//! the payload is deserialized once per render and never mutated beyond
//! the local image reconciliation pass in [`crate::images`].
//!
//! A top-level JSON `null` is a valid payload — it is the loader's
//! explicit not-found signal and routes to the not-found view instead of
//! the detail view.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A resolved product-details payload: the product plus its breadcrumb
/// trail, as supplied by the data loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsPage {
    pub breadcrumb_list: BreadcrumbList,
    pub product: Product,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(default)]
    pub item_list_element: Vec<ListItem>,
}

/// One breadcrumb entry. `item` is the link target; `position` is the
/// 1-based position in the trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub item: String,
    pub position: u32,
}

/// A purchasable SKU. `is_variant_of` links back to the product group,
/// whose `has_variant` list holds the sibling SKUs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub gtin: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Vec<Image>,
    #[serde(default)]
    pub is_variant_of: Option<ProductGroup>,
    #[serde(default)]
    pub offers: Option<AggregateOffer>,
}

/// The product group a SKU belongs to, with its sibling variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGroup {
    #[serde(rename = "productGroupID")]
    pub product_group_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub has_variant: Vec<Product>,
}

/// A product image. Owned by the product that lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub alternate_name: String,
}

/// Offer data for a SKU: the currency plus one entry per seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOffer {
    #[serde(default)]
    pub price_currency: Option<String>,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub price: f64,
    #[serde(default)]
    pub list_price: Option<f64>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub installments: Option<String>,
    #[serde(default)]
    pub availability: Availability,
}

/// Stock status, branching between the purchasable and out-of-stock
/// presentation. The loader sends schema.org URI values
/// (`https://schema.org/InStock`); bare names are accepted too, and
/// anything unrecognized degrades to `OutOfStock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    InStock,
    #[default]
    OutOfStock,
    PreOrder,
    Discontinued,
}

impl Availability {
    const SCHEMA_PREFIX: &'static str = "https://schema.org/";

    pub fn from_schema_uri(value: &str) -> Self {
        let name = value.strip_prefix(Self::SCHEMA_PREFIX).unwrap_or(value);
        match name {
            "InStock" => Availability::InStock,
            "PreOrder" => Availability::PreOrder,
            "Discontinued" => Availability::Discontinued,
            _ => Availability::OutOfStock,
        }
    }

    pub fn as_schema_uri(&self) -> &'static str {
        match self {
            Availability::InStock => "https://schema.org/InStock",
            Availability::OutOfStock => "https://schema.org/OutOfStock",
            Availability::PreOrder => "https://schema.org/PreOrder",
            Availability::Discontinued => "https://schema.org/Discontinued",
        }
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Availability::from_schema_uri(&value))
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_schema_uri())
    }
}

/// Read a payload file. A top-level `null` deserializes to `None` and
/// renders the not-found view; malformed JSON is an error.
pub fn load_payload(path: &Path) -> Result<Option<ProductDetailsPage>, PayloadError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
