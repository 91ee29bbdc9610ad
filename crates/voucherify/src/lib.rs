//! Voucherify API client
//!
//! Typed access to the Voucherify promotions API: vouchers, customers,
//! campaigns, distributions, redemptions, validations, segments, products and
//! validation rules.
//!
//! Every resource method returns a lazy [`Call`]. Nothing is sent until the
//! caller picks how to run it:
//!
//! - [`Call::execute`] blocks the current thread and returns the result.
//! - [`Call::execute_async`] runs on the shared worker executor and hands the
//!   result to a callback.
//! - [`Call::stream`] returns a cold single-element [`futures::Stream`].
//!
//! # Example
//!
//! ```no_run
//! use voucherify::{ApiVersion, ClientConfig, VoucherifyClient};
//! use voucherify::models::VouchersFilter;
//!
//! # fn example() -> Result<(), voucherify::Error> {
//! let config = ClientConfig::new("my-app-id", "my-secret-key")
//!     .with_api_version(ApiVersion::V2017_04_05);
//! let client = VoucherifyClient::new(config)?;
//!
//! let voucher = client.vouchers().get("SUMMER-10").execute()?;
//! println!("{:?}", voucher.discount);
//!
//! let page = client
//!     .vouchers()
//!     .list(VouchersFilter::default().limit(10).campaign("summer"))
//!     .execute()?;
//! println!("{} of {:?}", page.len(), page.total);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod context;
pub mod decoder;
pub mod dispatch;
mod env_vars;
mod error;
pub mod filter;
pub mod models;
mod operation;
pub mod resources;
pub mod transport;

pub use client::VoucherifyClient;
pub use config::{ApiVersion, ClientConfig, LogLevel, DEFAULT_ENDPOINT};
pub use decoder::{ListItem, ListShape, Listing};
pub use dispatch::{Call, Executor, Single};
pub use env_vars::*;
pub use error::{CallResult, Error, ErrorKind, ErrorResponse};
pub use filter::Filter;
pub use operation::{Operation, Resource};
pub use transport::{HttpTransport, Method, RawReply, Transport, WireRequest};
