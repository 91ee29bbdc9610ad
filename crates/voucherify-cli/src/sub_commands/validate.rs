use anyhow::Result;
use clap::Args;
use voucherify::models::{Customer, Order, VoucherValidationContext};
use voucherify::VoucherifyClient;

use super::print_json;

#[derive(Args)]
pub struct ValidateSubCommand {
    /// Voucher code
    code: String,
    /// Order amount in the smallest currency unit
    #[arg(long)]
    amount: Option<u64>,
    /// Customer source id
    #[arg(long)]
    customer: Option<String>,
}

pub fn validate(client: &VoucherifyClient, sub_command_args: &ValidateSubCommand) -> Result<()> {
    let context = VoucherValidationContext {
        customer: sub_command_args
            .customer
            .as_deref()
            .map(Customer::with_source_id),
        order: sub_command_args.amount.map(Order::amount),
        metadata: None,
    };

    let validation = client
        .validations()
        .validate_voucher(&sub_command_args.code, context)
        .execute()?;

    print_json(&validation)?;
    if !validation.valid {
        tracing::info!(
            "Voucher {} is not valid: {}",
            validation.code,
            validation.reason.as_deref().unwrap_or("no reason given")
        );
    }

    Ok(())
}
