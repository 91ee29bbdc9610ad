//! Distribution types

use serde::{Deserialize, Serialize};

use super::common::Metadata;
use super::customer::Customer;
use super::voucher::VoucherResponse;

/// Publication of a voucher to a customer
///
/// Either a `campaign`, to take the next free voucher of it, or a `voucher`
/// code is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishVoucher {
    /// Campaign to publish from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    /// Specific voucher code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voucher: Option<String>,
    /// Recipient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    /// Publication channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PublishVoucher {
    /// Publish the next voucher of a campaign
    pub fn from_campaign(campaign: impl Into<String>) -> Self {
        Self {
            campaign: Some(campaign.into()),
            ..Default::default()
        }
    }

    /// Publish a given voucher
    pub fn voucher(code: impl Into<String>) -> Self {
        Self {
            voucher: Some(code.into()),
            ..Default::default()
        }
    }

    /// Set recipient
    pub fn customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// Set channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

/// Published voucher
pub type PublishVoucherResponse = VoucherResponse;
