use anyhow::Result;
use clap::{Args, Subcommand};
use voucherify::models::VouchersFilter;
use voucherify::VoucherifyClient;

use super::{print_json, print_listing};

#[derive(Subcommand)]
pub enum VouchersSubCommand {
    /// Get a voucher
    Get {
        /// Voucher code
        code: String,
    },
    /// List vouchers
    List(ListVouchersArgs),
    /// Enable a voucher
    Enable {
        /// Voucher code
        code: String,
    },
    /// Disable a voucher
    Disable {
        /// Voucher code
        code: String,
    },
    /// Delete a voucher
    Delete {
        /// Voucher code
        code: String,
        /// Delete permanently instead of moving to the bin
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct ListVouchersArgs {
    /// Page size
    #[arg(long)]
    limit: Option<u32>,
    /// Page number
    #[arg(long)]
    page: Option<u32>,
    /// Campaign name
    #[arg(long)]
    campaign: Option<String>,
    /// Category
    #[arg(long)]
    category: Option<String>,
    /// Customer id
    #[arg(long)]
    customer: Option<String>,
}

impl From<&ListVouchersArgs> for VouchersFilter {
    fn from(args: &ListVouchersArgs) -> Self {
        VouchersFilter {
            limit: args.limit,
            campaign: args.campaign.clone(),
            page: args.page,
            category: args.category.clone(),
            customer: args.customer.clone(),
        }
    }
}

pub fn vouchers(client: &VoucherifyClient, sub_command_args: &VouchersSubCommand) -> Result<()> {
    let vouchers = client.vouchers();

    match sub_command_args {
        VouchersSubCommand::Get { code } => print_json(&vouchers.get(code).execute()?),
        VouchersSubCommand::List(args) => print_listing(&vouchers.list(args.into()).execute()?),
        VouchersSubCommand::Enable { code } => print_json(&vouchers.enable(code).execute()?),
        VouchersSubCommand::Disable { code } => print_json(&vouchers.disable(code).execute()?),
        VouchersSubCommand::Delete { code, force } => {
            vouchers.delete(code, *force).execute()?;
            println!("Voucher {} deleted", code);
            Ok(())
        }
    }
}
