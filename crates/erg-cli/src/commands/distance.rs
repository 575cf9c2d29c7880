use erg_core::error::ErgError;
use erg_core::model::{SpillSize, TimeOfDay};
use erg_core::ErgDatabase;

use crate::output;

pub fn distance(
    db: &ErgDatabase,
    un_number: &str,
    spill: &str,
    time: &str,
    json: bool,
) -> Result<(), ErgError> {
    let spill = SpillSize::from_str_loose(spill);
    let time = TimeOfDay::from_str_loose(time);

    match db.protective_action(un_number, spill, time) {
        Some(action) if json => output::json::print(&action),
        Some(action) => {
            output::table::print_action(&action);
            Ok(())
        }
        None => match db.full_erg_info(un_number) {
            // Known but not in the TIH table: the guide's isolation distance applies
            Some(info) if !json => {
                println!(
                    "UN{} ({}) has no protective action distances; isolate {} m ({} ft) per guide {}.",
                    info.material.un_number,
                    info.material.name,
                    info.guide.public_safety.isolation.meters,
                    info.guide.public_safety.isolation.feet,
                    info.guide.number
                );
                Ok(())
            }
            _ => super::not_found(un_number, json),
        },
    }
}

pub fn table(db: &ErgDatabase, json: bool) -> Result<(), ErgError> {
    let distances = db.tih_distances();
    if json {
        output::json::print(distances)
    } else {
        output::table::print_distance_table(distances);
        Ok(())
    }
}
