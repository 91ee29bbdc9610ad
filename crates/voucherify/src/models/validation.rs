//! Validation types

use serde::{Deserialize, Serialize};

use super::common::{Metadata, Order};
use super::customer::Customer;
use super::voucher::{Discount, Gift};

/// Context a voucher is validated against
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoucherValidationContext {
    /// Customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Validation outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherValidationResponse {
    /// Voucher code
    pub code: String,
    /// Voucher may be redeemed in this context
    pub valid: bool,
    /// Why the voucher is not valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Discount that would apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Credit that would apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
    /// Tracking id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}
