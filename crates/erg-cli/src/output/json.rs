use erg_core::error::ErgError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), ErgError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
