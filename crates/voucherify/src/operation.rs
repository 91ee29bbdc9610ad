//! Operation identity

use std::fmt;

use crate::transport::{Method, WireRequest};

/// API resource an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Vouchers
    Vouchers,
    /// Customers
    Customers,
    /// Campaigns
    Campaigns,
    /// Voucher distributions
    Distributions,
    /// Redemptions
    Redemptions,
    /// Validations
    Validations,
    /// Customer segments
    Segments,
    /// Products
    Products,
    /// Validation rules
    ValidationRules,
}

impl Resource {
    /// Resource name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vouchers => "vouchers",
            Self::Customers => "customers",
            Self::Campaigns => "campaigns",
            Self::Distributions => "distributions",
            Self::Redemptions => "redemptions",
            Self::Validations => "validations",
            Self::Segments => "segments",
            Self::Products => "products",
            Self::ValidationRules => "validation_rules",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical API action, e.g. `vouchers.get`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// Owning resource
    pub resource: Resource,
    /// Action name
    pub action: &'static str,
    /// HTTP method
    pub method: Method,
}

impl Operation {
    /// New operation
    pub const fn new(resource: Resource, action: &'static str, method: Method) -> Self {
        Self {
            resource,
            action,
            method,
        }
    }

    /// Repeating the operation has no additional effect
    pub fn is_idempotent(&self) -> bool {
        self.method.is_idempotent()
    }

    /// Wire request of this operation for the given path
    pub fn request<I, S>(&self, segments: I) -> WireRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WireRequest::new(self.method, segments)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET: Operation = Operation::new(Resource::Vouchers, "get", Method::Get);
    const REDEEM: Operation = Operation::new(Resource::Redemptions, "redeem", Method::Post);

    #[test]
    fn test_display() {
        assert_eq!(GET.to_string(), "vouchers.get");
        assert_eq!(
            Operation::new(Resource::ValidationRules, "create", Method::Post).to_string(),
            "validation_rules.create"
        );
    }

    #[test]
    fn test_idempotency_follows_method() {
        assert!(GET.is_idempotent());
        assert!(!REDEEM.is_idempotent());
    }

    #[test]
    fn test_request() {
        let request = REDEEM.request(["vouchers", "CODE", "redemption"]);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path(), "/vouchers/CODE/redemption");
        assert!(request.body.is_none());
    }
}
