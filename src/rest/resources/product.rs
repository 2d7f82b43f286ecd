//! Product entity.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::{resources::Product, Entity};
//! use moysklad::query::{Filter, PageRequestOptions};
//!
//! // Every non-archived product
//! let options = PageRequestOptions::new().filter(Filter::equals("archived", false));
//! let products = Product::all(&client, &options).await?;
//!
//! // Create
//! let product = Product {
//!     name: Some("Chair".to_string()),
//!     article: Some("CH-01".to_string()),
//!     ..Default::default()
//! };
//! let saved = product.create(&client).await?;
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{Entity, EntityMeta, EntityRef};

/// One sale price of a product.
///
/// `value` is in the smallest currency unit (kopecks for RUB).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalePrice {
    /// Price in minor units.
    pub value: f64,

    /// Currency of the price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<EntityRef>,

    /// Price type this value belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<EntityRef>,
}

/// A product (a good sold by the account).
///
/// ## Read-Only Fields
/// - `meta`, `id`, `account_id`
/// - `path_name` - Name of the product folder
/// - `updated` - Last modification time
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Entity metadata.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub meta: Option<EntityMeta>,

    /// Product id (UUID).
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Account id (UUID).
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub account_id: Option<String>,

    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// External code used by integrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Article (SKU).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the product is archived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Name of the containing product folder.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub path_name: Option<String>,

    /// Sale prices, one per price type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sale_prices: Vec<SalePrice>,

    /// Owner employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,

    /// Last modification time.
    /// Read-only field.
    #[serde(default, skip_serializing, with = "crate::rest::datetime::option")]
    pub updated: Option<NaiveDateTime>,
}

impl Entity for Product {
    const NAME: &'static str = "product";
    const PATH: &'static str = "entity/product";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_api_representation() {
        let product: Product = serde_json::from_value(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/product/7944ef04",
                "type": "product",
                "mediaType": "application/json"
            },
            "id": "7944ef04",
            "accountId": "1185513e",
            "name": "Chair",
            "code": "00001",
            "externalCode": "ext-1",
            "archived": false,
            "pathName": "Furniture",
            "updated": "2024-03-01 12:30:45.123",
            "salePrices": [{"value": 150000.0, "priceType": {"meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/context/companysettings/pricetype/1",
                "type": "pricetype"
            }}}]
        }))
        .unwrap();

        assert_eq!(product.id.as_deref(), Some("7944ef04"));
        assert_eq!(product.path_name.as_deref(), Some("Furniture"));
        assert_eq!(product.sale_prices.len(), 1);
        assert!((product.sale_prices[0].value - 150_000.0).abs() < f64::EPSILON);
        assert_eq!(
            product.updated.unwrap().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2024-03-01 12:30:45.123"
        );
    }

    #[test]
    fn test_product_serialization_skips_read_only_fields() {
        let product = Product {
            id: Some("7944ef04".to_string()),
            account_id: Some("1185513e".to_string()),
            name: Some("Chair".to_string()),
            article: Some("CH-01".to_string()),
            path_name: Some("Furniture".to_string()),
            updated: crate::rest::datetime::parse("2024-03-01 12:30:45").ok(),
            ..Default::default()
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value, json!({"name": "Chair", "article": "CH-01"}));
    }

    #[test]
    fn test_product_endpoint() {
        assert_eq!(Product::NAME, "product");
        assert_eq!(Product::PATH, "entity/product");
    }
}
