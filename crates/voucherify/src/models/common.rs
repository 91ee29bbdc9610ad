//! Types shared across resources

use serde::{Deserialize, Serialize};

/// Free form metadata attached to most objects
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Order the voucher is applied to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Amount in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    /// Items of the order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Order {
    /// Order with an amount
    pub fn amount(amount: u64) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }
}

/// Line of an [`Order`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Sku id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<String>,
    /// Quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Unit price in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}
