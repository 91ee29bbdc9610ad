//! Redemptions resource

use crate::context::Context;
use crate::dispatch::Call;
use crate::models::{
    RedeemVoucher, RedeemVoucherResponse, RedemptionsFilter, RedemptionsResponse,
    RollbackRedemption, RollbackRedemptionResponse, VoucherRedemption,
};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const REDEEM: Operation = Operation::new(Resource::Redemptions, "redeem", Method::Post);
const GET: Operation = Operation::new(Resource::Redemptions, "get", Method::Get);
const LIST: Operation = Operation::new(Resource::Redemptions, "list", Method::Get);
const ROLLBACK: Operation = Operation::new(Resource::Redemptions, "rollback", Method::Post);

/// Redemptions
#[derive(Debug, Clone)]
pub struct Redemptions {
    ctx: Context,
}

impl Redemptions {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Redeem a voucher
    pub fn redeem(&self, code: &str, redeem: RedeemVoucher) -> Call<RedeemVoucherResponse> {
        let code = code.to_owned();
        self.ctx.object(REDEEM, move || {
            REDEEM
                .request(["vouchers", code.as_str(), "redemption"])
                .json(&redeem)
        })
    }

    /// Redemption limits and history of a voucher
    pub fn get(&self, code: &str) -> Call<VoucherRedemption> {
        let code = code.to_owned();
        self.ctx.object(GET, move || {
            Ok(GET.request(["vouchers", code.as_str(), "redemption"]))
        })
    }

    /// List redemptions
    pub fn list(&self, filter: RedemptionsFilter) -> Call<RedemptionsResponse> {
        self.ctx
            .object(LIST, move || LIST.request(["redemptions"]).with_filter(&filter))
    }

    /// Roll back a redemption
    pub fn rollback(
        &self,
        redemption_id: &str,
        reason: Option<&str>,
        rollback: RollbackRedemption,
    ) -> Call<RollbackRedemptionResponse> {
        let redemption_id = redemption_id.to_owned();
        let reason = reason.map(ToOwned::to_owned);
        self.ctx.object(ROLLBACK, move || {
            let mut request = ROLLBACK
                .request(["redemptions", redemption_id.as_str(), "rollback"])
                .json(&rollback)?;
            if let Some(reason) = &reason {
                request = request.with_query_pair("reason", reason.as_str());
            }
            Ok(request)
        })
    }
}
