use anyhow::Result;
use clap::Subcommand;
use voucherify::VoucherifyClient;

use super::print_json;

#[derive(Subcommand)]
pub enum CustomersSubCommand {
    /// Get a customer
    Get {
        /// Customer id
        id: String,
    },
    /// Delete a customer
    Delete {
        /// Customer id
        id: String,
    },
}

pub fn customers(client: &VoucherifyClient, sub_command_args: &CustomersSubCommand) -> Result<()> {
    match sub_command_args {
        CustomersSubCommand::Get { id } => print_json(&client.customers().get(id).execute()?),
        CustomersSubCommand::Delete { id } => {
            client.customers().delete(id).execute()?;
            println!("Customer {} deleted", id);
            Ok(())
        }
    }
}
