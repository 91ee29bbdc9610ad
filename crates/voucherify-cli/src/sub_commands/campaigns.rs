use anyhow::Result;
use clap::Subcommand;
use voucherify::models::CampaignsFilter;
use voucherify::VoucherifyClient;

use super::{print_json, print_listing};

#[derive(Subcommand)]
pub enum CampaignsSubCommand {
    /// Get a campaign
    Get {
        /// Campaign name
        name: String,
    },
    /// List campaigns
    List {
        /// Page size
        #[arg(long)]
        limit: Option<u32>,
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
}

pub fn campaigns(client: &VoucherifyClient, sub_command_args: &CampaignsSubCommand) -> Result<()> {
    match sub_command_args {
        CampaignsSubCommand::Get { name } => print_json(&client.campaigns().get(name).execute()?),
        CampaignsSubCommand::List { limit, page } => {
            let filter = CampaignsFilter {
                limit: *limit,
                page: *page,
            };
            print_listing(&client.campaigns().list(filter).execute()?)
        }
    }
}
