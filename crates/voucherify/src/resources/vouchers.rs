//! Vouchers resource

use crate::context::Context;
use crate::decoder::Listing;
use crate::dispatch::Call;
use crate::models::{
    AddBalance, AddBalanceResponse, Voucher, VoucherResponse, VoucherUpdate, VouchersFilter,
};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const CREATE: Operation = Operation::new(Resource::Vouchers, "create", Method::Post);
const GET: Operation = Operation::new(Resource::Vouchers, "get", Method::Get);
const UPDATE: Operation = Operation::new(Resource::Vouchers, "update", Method::Put);
const LIST: Operation = Operation::new(Resource::Vouchers, "list", Method::Get);
const ENABLE: Operation = Operation::new(Resource::Vouchers, "enable", Method::Post);
const DISABLE: Operation = Operation::new(Resource::Vouchers, "disable", Method::Post);
const DELETE: Operation = Operation::new(Resource::Vouchers, "delete", Method::Delete);
const ADD_BALANCE: Operation = Operation::new(Resource::Vouchers, "add_balance", Method::Post);

/// `/vouchers`
#[derive(Debug, Clone)]
pub struct Vouchers {
    ctx: Context,
}

impl Vouchers {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Create a voucher
    ///
    /// Posted to `/vouchers/{code}` when the voucher carries a code, to
    /// `/vouchers` otherwise so the API generates one.
    pub fn create(&self, voucher: Voucher) -> Call<VoucherResponse> {
        self.ctx.object(CREATE, move || {
            let mut segments = vec!["vouchers".to_string()];
            if let Some(code) = &voucher.code {
                segments.push(code.clone());
            }
            CREATE.request(segments).json(&voucher)
        })
    }

    /// Get a voucher by code
    pub fn get(&self, code: &str) -> Call<VoucherResponse> {
        let code = code.to_owned();
        self.ctx
            .object(GET, move || Ok(GET.request(["vouchers", code.as_str()])))
    }

    /// Update a voucher
    pub fn update(&self, code: &str, update: VoucherUpdate) -> Call<VoucherResponse> {
        let code = code.to_owned();
        self.ctx.object(UPDATE, move || {
            UPDATE.request(["vouchers", code.as_str()]).json(&update)
        })
    }

    /// List vouchers
    ///
    /// The shape of the answer depends on the client's API version, see
    /// [`decode_list`](crate::decoder::decode_list).
    pub fn list(&self, filter: VouchersFilter) -> Call<Listing<VoucherResponse>> {
        self.ctx
            .list(LIST, move || LIST.request(["vouchers"]).with_filter(&filter))
    }

    /// Enable a voucher
    pub fn enable(&self, code: &str) -> Call<VoucherResponse> {
        let code = code.to_owned();
        self.ctx.object(ENABLE, move || {
            Ok(ENABLE.request(["vouchers", code.as_str(), "enable"]))
        })
    }

    /// Disable a voucher
    pub fn disable(&self, code: &str) -> Call<VoucherResponse> {
        let code = code.to_owned();
        self.ctx.object(DISABLE, move || {
            Ok(DISABLE.request(["vouchers", code.as_str(), "disable"]))
        })
    }

    /// Delete a voucher
    ///
    /// Without `force` the voucher is moved to the bin and its code stays
    /// taken.
    pub fn delete(&self, code: &str, force: bool) -> Call<()> {
        let code = code.to_owned();
        self.ctx.empty(DELETE, move || {
            Ok(DELETE
                .request(["vouchers", code.as_str()])
                .with_query_pair("force", force.to_string()))
        })
    }

    /// Top up a gift voucher
    pub fn add_balance(&self, code: &str, balance: AddBalance) -> Call<AddBalanceResponse> {
        let code = code.to_owned();
        self.ctx.object(ADD_BALANCE, move || {
            ADD_BALANCE
                .request(["vouchers", code.as_str(), "balance"])
                .json(&balance)
        })
    }
}
