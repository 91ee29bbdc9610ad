//! Validations resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{VoucherValidationContext, VoucherValidationResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const VALIDATE_VOUCHER: Operation =
    Operation::new(Resource::Validations, "validate_voucher", Method::Post);

/// Validations
#[derive(Debug, Clone)]
pub struct Validations {
    ctx: Context,
}

impl Validations {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Check whether a voucher can be redeemed in a context
    ///
    /// An invalid voucher is a successful call with `valid == false`.
    pub fn validate_voucher(
        &self,
        code: &str,
        context: VoucherValidationContext,
    ) -> Call<VoucherValidationResponse> {
        let code = code.to_owned();
        self.ctx.object(VALIDATE_VOUCHER, move || {
            VALIDATE_VOUCHER
                .request(["vouchers", code.as_str(), "validate"])
                .json(&context)
        })
    }
}
