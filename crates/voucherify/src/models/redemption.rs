//! Redemption types

use serde::{Deserialize, Serialize};

use super::common::{Metadata, Order};
use super::customer::{Customer, CustomerResponse};
use super::voucher::VoucherResponse;
use crate::filter::Filter;

/// Redemption request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedeemVoucher {
    /// Redeeming customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Order the voucher is applied to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl RedeemVoucher {
    /// Set customer
    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Set order
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

/// Outcome of a redemption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedemptionResult {
    /// Redeemed
    Success,
    /// Rejected
    Failure,
}

/// Redemption as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedeemVoucherResponse {
    /// Redemption id
    pub id: String,
    /// Redemption time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Tracking id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    /// Order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RedemptionResult>,
    /// Redeemed voucher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<VoucherResponse>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Criteria of the redemption list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionsFilter {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Earliest redemption date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Latest redemption date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RedemptionResult>,
    /// Customer id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl RedemptionsFilter {
    /// Set page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set date range
    pub fn between(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    /// Set outcome
    pub fn result(mut self, result: RedemptionResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Set customer
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }
}

impl Filter for RedemptionsFilter {}

/// Page of redemptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedemptionsResponse {
    /// Total number of matching redemptions
    #[serde(default)]
    pub total: u64,
    /// Redemptions
    #[serde(default)]
    pub redemptions: Vec<RedeemVoucherResponse>,
}

/// Rollback request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollbackRedemption {
    /// Customer performing the rollback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Tracking id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

/// Rollback as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollbackRedemptionResponse {
    /// Rollback id
    pub id: String,
    /// Rollback time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Redemption that was rolled back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption: Option<String>,
    /// Reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Outcome
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RedemptionResult>,
    /// Customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerResponse>,
    /// Voucher after the rollback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<VoucherResponse>,
}
