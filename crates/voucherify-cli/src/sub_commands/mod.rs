use anyhow::Result;
use serde::Serialize;
use voucherify::Listing;

pub mod campaigns;
pub mod customers;
pub mod validate;
pub mod vouchers;

pub fn print_json<T>(value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_listing<T>(listing: &Listing<T>) -> Result<()>
where
    T: Serialize,
{
    print_json(&listing.items)?;
    if let Some(total) = listing.total {
        println!(
            "{} of {} shown{}",
            listing.len(),
            total,
            if listing.has_more == Some(true) {
                ", more available"
            } else {
                ""
            }
        );
    }
    Ok(())
}
