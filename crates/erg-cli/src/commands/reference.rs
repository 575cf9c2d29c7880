use erg_core::error::ErgError;
use erg_core::ErgDatabase;
use std::path::Path;

use crate::output;

pub fn contacts(db: &ErgDatabase, country: Option<&str>, json: bool) -> Result<(), ErgError> {
    let contacts = db.contacts(country);
    if json {
        output::json::print(&contacts)
    } else {
        output::table::print_contacts(&contacts);
        Ok(())
    }
}

pub fn classes(db: &ErgDatabase, json: bool) -> Result<(), ErgError> {
    if json {
        output::json::print(db.hazard_classes())
    } else {
        output::table::print_classes(db.hazard_classes());
        Ok(())
    }
}

pub fn stats(db: &ErgDatabase, json: bool) -> Result<(), ErgError> {
    let stats = db.stats();
    if json {
        output::json::print(&stats)
    } else {
        output::table::print_stats(&stats);
        Ok(())
    }
}

pub fn validate(file: &Path) -> Result<(), ErgError> {
    let db = ErgDatabase::from_path(file)?;
    let stats = db.stats();

    println!("Dataset '{}' is valid.", stats.version);
    println!("  Materials: {} ({} TIH)", stats.materials, stats.tih_materials);
    println!("  Guides: {}", stats.guides);
    println!("  Protective distances: {}", stats.protective_distances);
    println!("  Product aliases: {}", stats.product_aliases);

    // Not errors, but worth knowing before shipping the file
    let missing: Vec<&str> = db
        .materials()
        .iter()
        .filter(|m| m.is_tih && db.get_protective_distance(&m.un_number).is_none())
        .map(|m| m.un_number.as_str())
        .collect();
    if !missing.is_empty() {
        println!("\nWarnings:");
        println!(
            "  - TIH materials without protective distances: {}",
            missing.join(", ")
        );
    }

    Ok(())
}
