//! Request and response types

mod campaign;
mod common;
mod customer;
mod distribution;
mod product;
mod redemption;
mod segment;
mod validation;
mod validation_rule;
mod voucher;

pub use campaign::*;
pub use common::*;
pub use customer::*;
pub use distribution::*;
pub use product::*;
pub use redemption::*;
pub use segment::*;
pub use validation::*;
pub use validation_rule::*;
pub use voucher::*;
