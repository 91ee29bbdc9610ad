//! Voucher types

use serde::{Deserialize, Serialize};

use super::common::Metadata;
use crate::decoder::ListItem;
use crate::filter::Filter;

/// Kind of discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Fixed amount off
    Amount,
    /// Percentage off
    Percent,
    /// Free units of an item
    Unit,
}

/// Discount of a voucher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// Kind of discount
    #[serde(rename = "type")]
    pub kind: DiscountType,
    /// Amount off, in the smallest currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<f64>,
    /// Percent off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<f64>,
    /// Units off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_off: Option<f64>,
    /// Product the units apply to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
}

impl Discount {
    fn of(kind: DiscountType) -> Self {
        Self {
            kind,
            amount_off: None,
            percent_off: None,
            unit_off: None,
            unit_type: None,
        }
    }

    /// Fixed amount discount
    pub fn amount_off(amount: f64) -> Self {
        Self {
            amount_off: Some(amount),
            ..Self::of(DiscountType::Amount)
        }
    }

    /// Percentage discount
    pub fn percent_off(percent: f64) -> Self {
        Self {
            percent_off: Some(percent),
            ..Self::of(DiscountType::Percent)
        }
    }

    /// Unit discount
    pub fn unit_off(units: f64) -> Self {
        Self {
            unit_off: Some(units),
            ..Self::of(DiscountType::Unit)
        }
    }

    /// Unit discount on a given product
    pub fn unit_off_of(units: f64, unit_type: impl Into<String>) -> Self {
        Self {
            unit_type: Some(unit_type.into()),
            ..Self::unit_off(units)
        }
    }
}

/// Gift card credit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    /// Initial amount
    pub amount: u64,
    /// Remaining balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<u64>,
}

/// Kind of voucher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherType {
    /// Discount voucher
    DiscountVoucher,
    /// Gift voucher
    GiftVoucher,
}

/// One redemption of a voucher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionEntry {
    /// When the voucher was redeemed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Tracking id of the consumer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    /// Customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Redemption id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Redemption limits and history of a voucher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherRedemption {
    /// How many times the voucher may be redeemed. `None` is unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// How many times it was redeemed
    #[serde(default)]
    pub redeemed_quantity: u32,
    /// Redemption history
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redemption_entries: Vec<RedemptionEntry>,
}

impl VoucherRedemption {
    /// Voucher redeemable `limit` times
    pub fn limited(limit: u32) -> Self {
        Self {
            quantity: Some(limit),
            ..Default::default()
        }
    }

    /// Voucher redeemable any number of times
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// Shape of generated codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    /// Number of characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Characters to pick from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Postfix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    /// Pattern, `#` is replaced by a random character
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Voucher definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    /// Code. Generated by the API when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Campaign name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kind of voucher
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VoucherType>,
    /// Discount, for discount vouchers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Credit, for gift vouchers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
    /// Start of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Redemption limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption: Option<VoucherRedemption>,
    /// Active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Referral code flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_referral_code: Option<bool>,
    /// Additional info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Code generation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_config: Option<CodeConfig>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Voucher {
    /// Discount voucher
    pub fn discount(discount: Discount) -> Self {
        Self {
            kind: Some(VoucherType::DiscountVoucher),
            discount: Some(discount),
            ..Default::default()
        }
    }

    /// Gift voucher
    pub fn gift(amount: u64) -> Self {
        Self {
            kind: Some(VoucherType::GiftVoucher),
            gift: Some(Gift {
                amount,
                balance: None,
            }),
            ..Default::default()
        }
    }

    /// Set code
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set campaign
    pub fn campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Set category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set active flag
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Set redemption limits
    pub fn redemption(mut self, redemption: VoucherRedemption) -> Self {
        self.redemption = Some(redemption);
        self
    }
}

/// Fields that may change on an existing voucher
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoucherUpdate {
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Start of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Additional info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Voucher as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherResponse {
    /// Voucher id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Code
    pub code: String,
    /// Campaign name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kind of voucher
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VoucherType>,
    /// Discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
    /// Start of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Redemption limits and history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption: Option<VoucherRedemption>,
    /// Active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Referral code flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_referral_code: Option<bool>,
    /// Additional info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ListItem for VoucherResponse {
    const ITEMS_FIELD: &'static str = "vouchers";
}

/// Gift voucher top-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBalance {
    /// Amount to add
    pub amount: u64,
}

/// Result of a gift voucher top-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBalanceResponse {
    /// Amount added
    pub amount: u64,
    /// Balance after the top-up
    pub balance: u64,
    /// Object type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Criteria of the voucher list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VouchersFilter {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Campaign name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl VouchersFilter {
    /// Set page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set campaign
    pub fn campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Set page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set customer
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }
}

impl Filter for VouchersFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_order_ignores_setter_order() {
        let filter = VouchersFilter::default()
            .category("some-category")
            .page(5)
            .campaign("some-campaign")
            .limit(10);
        let query = serde_urlencoded::to_string(&filter).expect("encodable");
        assert_eq!(
            query,
            "limit=10&campaign=some-campaign&page=5&category=some-category"
        );
    }

    #[test]
    fn test_discount_serialization() {
        let json = serde_json::to_value(Discount::unit_off(10.0)).expect("serializable");
        assert_eq!(json, serde_json::json!({"type": "UNIT", "unit_off": 10.0}));
    }

    #[test]
    fn test_redemption_limits() {
        assert_eq!(VoucherRedemption::limited(3).quantity, Some(3));
        assert_eq!(VoucherRedemption::unlimited().quantity, None);
        let json = serde_json::to_value(VoucherRedemption::unlimited()).expect("serializable");
        assert_eq!(json, serde_json::json!({"redeemed_quantity": 0}));
    }

    #[test]
    fn test_voucher_response_ignores_unknown_fields() {
        let raw = r#"{
            "code": "some-code",
            "campaign": "my-campaign",
            "category": "category",
            "type": "DISCOUNT_VOUCHER",
            "discount": {"type": "AMOUNT", "amount_off": 1000},
            "redemption": {
                "quantity": 1,
                "redeemed_quantity": 1,
                "redemption_entries": [{"date": "2016-07-08T12:00:00Z", "tracking_id": "track-1"}]
            },
            "active": true,
            "assets": {"qr": {"url": "https://example.com/qr"}}
        }"#;
        let voucher: VoucherResponse = serde_json::from_str(raw).expect("valid voucher");
        assert_eq!(voucher.code, "some-code");
        assert_eq!(voucher.discount, Some(Discount::amount_off(1000.0)));
        let redemption = voucher.redemption.expect("redemption");
        assert_eq!(redemption.redemption_entries[0].tracking_id.as_deref(), Some("track-1"));
    }
}
