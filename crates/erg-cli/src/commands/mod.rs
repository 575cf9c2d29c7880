pub mod distance;
pub mod guide;
pub mod lookup;
pub mod reference;
pub mod search;

use erg_core::error::ErgError;

/// Lookups that find nothing are not errors: say so and exit 0.
pub fn not_found(query: &str, json: bool) -> Result<(), ErgError> {
    if json {
        println!("null");
    } else {
        println!("No hazmat guidance available for '{}'.", query.trim());
    }
    Ok(())
}
