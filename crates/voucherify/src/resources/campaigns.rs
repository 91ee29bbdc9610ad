//! Campaigns resource

use crate::context::Context;
use crate::decoder::Listing;
use crate::dispatch::Call;
use crate::models::{
    AddVoucherToCampaign, CampaignResponse, CampaignsFilter, CreateCampaign, VoucherResponse,
};
use crate::operation::{Operation, Resource};
use crate::transport::Method;

const CREATE: Operation = Operation::new(Resource::Campaigns, "create", Method::Post);
const GET: Operation = Operation::new(Resource::Campaigns, "get", Method::Get);
const LIST: Operation = Operation::new(Resource::Campaigns, "list", Method::Get);
const ADD_VOUCHER: Operation = Operation::new(Resource::Campaigns, "add_voucher", Method::Post);
const DELETE: Operation = Operation::new(Resource::Campaigns, "delete", Method::Delete);

/// `/campaigns`
#[derive(Debug, Clone)]
pub struct Campaigns {
    ctx: Context,
}

impl Campaigns {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Create a campaign
    pub fn create(&self, campaign: CreateCampaign) -> Call<CampaignResponse> {
        self.ctx
            .object(CREATE, move || CREATE.request(["campaigns"]).json(&campaign))
    }

    /// Get a campaign by name
    pub fn get(&self, name: &str) -> Call<CampaignResponse> {
        let name = name.to_owned();
        self.ctx
            .object(GET, move || Ok(GET.request(["campaigns", name.as_str()])))
    }

    /// List campaigns
    pub fn list(&self, filter: CampaignsFilter) -> Call<Listing<CampaignResponse>> {
        self.ctx
            .list(LIST, move || LIST.request(["campaigns"]).with_filter(&filter))
    }

    /// Add a voucher to a campaign
    pub fn add_voucher(&self, name: &str, voucher: AddVoucherToCampaign) -> Call<VoucherResponse> {
        let name = name.to_owned();
        self.ctx.object(ADD_VOUCHER, move || {
            ADD_VOUCHER
                .request(["campaigns", name.as_str(), "vouchers"])
                .json(&voucher)
        })
    }

    /// Delete a campaign and its vouchers
    pub fn delete(&self, name: &str, force: bool) -> Call<()> {
        let name = name.to_owned();
        self.ctx.empty(DELETE, move || {
            Ok(DELETE
                .request(["campaigns", name.as_str()])
                .with_query_pair("force", force.to_string()))
        })
    }
}
