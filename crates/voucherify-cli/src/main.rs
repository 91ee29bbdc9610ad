//! Voucherify command line client

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use voucherify::{ApiVersion, VoucherifyClient};

mod settings;
mod sub_commands;

/// Command line client for the Voucherify API
#[derive(Parser)]
#[command(name = "voucherify-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Application id
    #[arg(long)]
    app_id: Option<String>,
    /// Secret key
    #[arg(long)]
    secret_key: Option<String>,
    /// Endpoint, host and base path without scheme
    #[arg(long)]
    endpoint: Option<String>,
    /// Use plain http
    #[arg(long)]
    insecure: bool,
    /// Pinned API version, e.g. v2017-04-05
    #[arg(long)]
    api_version: Option<ApiVersion>,
    /// Logging level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Vouchers
    #[command(subcommand)]
    Vouchers(sub_commands::vouchers::VouchersSubCommand),
    /// Customers
    #[command(subcommand)]
    Customers(sub_commands::customers::CustomersSubCommand),
    /// Campaigns
    #[command(subcommand)]
    Campaigns(sub_commands::campaigns::CampaignsSubCommand),
    /// Validate a voucher
    Validate(sub_commands::validate::ValidateSubCommand),
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let env_filter = EnvFilter::new(format!("{},hyper=warn,reqwest=warn", args.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = settings::load(args.config.as_deref())?.from_env();

    if let Some(app_id) = args.app_id {
        config.app_id = app_id;
    }
    if let Some(secret_key) = args.secret_key {
        config.client_secret_key = secret_key;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = Some(endpoint);
    }
    if args.insecure {
        config.secure = false;
    }
    if let Some(api_version) = args.api_version {
        config.api_version = Some(api_version);
    }

    let client = VoucherifyClient::new(config)?;

    match &args.command {
        Commands::Vouchers(sub_command_args) => {
            sub_commands::vouchers::vouchers(&client, sub_command_args)
        }
        Commands::Customers(sub_command_args) => {
            sub_commands::customers::customers(&client, sub_command_args)
        }
        Commands::Campaigns(sub_command_args) => {
            sub_commands::campaigns::campaigns(&client, sub_command_args)
        }
        Commands::Validate(sub_command_args) => {
            sub_commands::validate::validate(&client, sub_command_args)
        }
    }
}
