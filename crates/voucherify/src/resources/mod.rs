//! API resources
//!
//! One type per resource. Methods build a [`Call`](crate::Call) and never send
//! anything themselves.

mod campaigns;
mod customers;
mod distributions;
mod products;
mod redemptions;
mod segments;
mod validation_rules;
mod validations;
mod vouchers;

pub use campaigns::Campaigns;
pub use customers::Customers;
pub use distributions::Distributions;
pub use products::Products;
pub use redemptions::Redemptions;
pub use segments::Segments;
pub use validation_rules::ValidationRules;
pub use validations::Validations;
pub use vouchers::Vouchers;
