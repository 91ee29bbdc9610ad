//! Voucherify client

use std::fmt;
use std::sync::Arc;

use crate::config::{ApiVersion, ClientConfig};
use crate::context::{Context, Core};
use crate::dispatch::Executor;
use crate::error::Error;
use crate::resources::{
    Campaigns, Customers, Distributions, Products, Redemptions, Segments, ValidationRules,
    Validations, Vouchers,
};
use crate::transport::{HttpTransport, Transport};

/// Entry point of the API
///
/// Cheap to clone; clones share the transport and the executor.
#[derive(Clone)]
pub struct VoucherifyClient {
    api_version: Option<ApiVersion>,
    vouchers: Vouchers,
    customers: Customers,
    campaigns: Campaigns,
    distributions: Distributions,
    redemptions: Redemptions,
    validations: Validations,
    segments: Segments,
    products: Products,
    validation_rules: ValidationRules,
}

impl fmt::Debug for VoucherifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoucherifyClient")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl VoucherifyClient {
    /// Client over HTTP running on the shared worker executor
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(&config, Arc::new(transport))
    }

    /// Client over a custom transport
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        Self::with_executor(config, transport, Executor::shared()?)
    }

    /// Client over a custom transport and executor
    pub fn with_executor(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        executor: Executor,
    ) -> Result<Self, Error> {
        config.validate()?;
        tracing::debug!(
            "Creating Voucherify client, api version: {}",
            config.api_version.map_or("unset", |version| version.as_str())
        );

        let ctx = Context::new(Core::new(transport, config.api_version), executor);

        Ok(Self {
            api_version: config.api_version,
            vouchers: Vouchers::new(ctx.clone()),
            customers: Customers::new(ctx.clone()),
            campaigns: Campaigns::new(ctx.clone()),
            distributions: Distributions::new(ctx.clone()),
            redemptions: Redemptions::new(ctx.clone()),
            validations: Validations::new(ctx.clone()),
            segments: Segments::new(ctx.clone()),
            products: Products::new(ctx.clone()),
            validation_rules: ValidationRules::new(ctx),
        })
    }

    /// API version pinned at construction
    pub fn api_version(&self) -> Option<ApiVersion> {
        self.api_version
    }

    /// Vouchers
    pub fn vouchers(&self) -> &Vouchers {
        &self.vouchers
    }

    /// Customers
    pub fn customers(&self) -> &Customers {
        &self.customers
    }

    /// Campaigns
    pub fn campaigns(&self) -> &Campaigns {
        &self.campaigns
    }

    /// Voucher distribution
    pub fn distributions(&self) -> &Distributions {
        &self.distributions
    }

    /// Redemptions
    pub fn redemptions(&self) -> &Redemptions {
        &self.redemptions
    }

    /// Validations
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    /// Customer segments
    pub fn segments(&self) -> &Segments {
        &self.segments
    }

    /// Products
    pub fn products(&self) -> &Products {
        &self.products
    }

    /// Validation rules
    pub fn validation_rules(&self) -> &ValidationRules {
        &self.validation_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_credentials() {
        let result = VoucherifyClient::new(ClientConfig::new("app", ""));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_new_keeps_api_version() {
        let client = VoucherifyClient::new(
            ClientConfig::new("app", "secret").with_api_version(ApiVersion::V2018_08_01),
        )
        .expect("valid config");
        assert_eq!(client.api_version(), Some(ApiVersion::V2018_08_01));
        assert_eq!(client.vouchers().get("CODE").operation().to_string(), "vouchers.get");
    }
}
