//! Distributions resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{PublishVoucher, PublishVoucherResponse};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const PUBLISH: Operation = Operation::new(Resource::Distributions, "publish", Method::Post);

/// Voucher distribution, `/vouchers/publish`
#[derive(Debug, Clone)]
pub struct Distributions {
    ctx: Context,
}

impl Distributions {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Publish a voucher to a customer
    pub fn publish(&self, publish: PublishVoucher) -> Call<PublishVoucherResponse> {
        self.ctx.object(PUBLISH, move || {
            PUBLISH.request(["vouchers", "publish"]).json(&publish)
        })
    }
}
