//! Campaign types

use serde::{Deserialize, Serialize};

use super::common::Metadata;
use super::voucher::{CodeConfig, Discount, Gift, VoucherRedemption, VoucherType};
use crate::decoder::ListItem;
use crate::filter::Filter;

/// Template of the vouchers generated for a campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignVoucher {
    /// Kind of voucher
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VoucherType>,
    /// Discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<Gift>,
    /// Redemption limits of each voucher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption: Option<VoucherRedemption>,
    /// Code generation settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_config: Option<CodeConfig>,
}

/// New campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCampaign {
    /// Campaign name
    pub name: String,
    /// Number of vouchers to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vouchers_count: Option<u32>,
    /// Start of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Voucher template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<CampaignVoucher>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Campaign as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResponse {
    /// Campaign id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Campaign name
    pub name: String,
    /// Campaign type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    /// Number of vouchers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vouchers_count: Option<u32>,
    /// Start of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of validity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Voucher template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<CampaignVoucher>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ListItem for CampaignResponse {
    const ITEMS_FIELD: &'static str = "campaigns";
}

/// Voucher added to an existing campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddVoucherToCampaign {
    /// Code. Generated from the campaign settings when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Additional info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    /// Redemption limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redemption: Option<VoucherRedemption>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Criteria of the campaign list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignsFilter {
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl CampaignsFilter {
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
}

impl Filter for CampaignsFilter {}
