use erg_core::error::ErgError;
use erg_core::model::{SpillSize, TimeOfDay};
use erg_core::{ErgDatabase, ErgInfo, QuickLookup, Resolution};
use serde::Serialize;

use super::not_found;
use crate::output;

#[derive(Serialize)]
struct ProductMatch<'a> {
    resolution: Resolution<'a>,
    info: ErgInfo<'a>,
}

pub fn lookup(db: &ErgDatabase, un_number: &str, json: bool) -> Result<(), ErgError> {
    let Some(info) = db.full_erg_info(un_number) else {
        return not_found(un_number, json);
    };
    if json {
        output::json::print(&info)
    } else {
        output::table::print_info(db, &info, None);
        Ok(())
    }
}

pub fn product(db: &ErgDatabase, name: &str, json: bool) -> Result<(), ErgError> {
    let Some(resolution) = db.resolve_product(name) else {
        return not_found(name, json);
    };
    let Some(info) = db.full_erg_info(&resolution.material.un_number) else {
        return not_found(name, json);
    };

    if json {
        output::json::print(&ProductMatch { resolution, info })
    } else {
        output::table::print_info(db, &info, Some(&resolution));
        Ok(())
    }
}

pub fn quick(
    db: &ErgDatabase,
    un_number: &str,
    spill: &str,
    time: &str,
    json: bool,
) -> Result<(), ErgError> {
    let result = db.quick_lookup(
        un_number,
        SpillSize::from_str_loose(spill),
        TimeOfDay::from_str_loose(time),
    );
    if json {
        return output::json::print(&result);
    }
    match result {
        QuickLookup::Identified(card) => output::table::print_quick(&card),
        QuickLookup::UnknownMaterial(cargo) => output::table::print_unidentified(&cargo),
    }
    Ok(())
}
