use erg_core::error::ErgError;
use erg_core::{render_guide_text, ErgDatabase};

use crate::output;

pub fn list(db: &ErgDatabase, json: bool) -> Result<(), ErgError> {
    let summaries = db.guide_summaries();
    if json {
        output::json::print(&summaries)
    } else {
        output::table::print_guide_list(&summaries);
        Ok(())
    }
}

pub fn show(db: &ErgDatabase, number: u16, json: bool) -> Result<(), ErgError> {
    let Some(guide) = db.get_guide(number) else {
        return super::not_found(&format!("guide {number}"), json);
    };
    if json {
        output::json::print(guide)
    } else {
        print!("{}", render_guide_text(guide));
        Ok(())
    }
}

pub fn materials(
    db: &ErgDatabase,
    number: u16,
    offset: usize,
    limit: usize,
    json: bool,
) -> Result<(), ErgError> {
    let Some(page) = db.materials_for_guide(number, offset, limit) else {
        return super::not_found(&format!("guide {number}"), json);
    };
    if json {
        return output::json::print(&page);
    }

    println!(
        "Guide {}: {} material(s), showing {}-{}\n",
        page.guide_number,
        page.total_materials,
        (page.offset + 1).min(page.total_materials),
        page.offset + page.materials.len()
    );
    output::table::print_materials(&page.materials);
    Ok(())
}
