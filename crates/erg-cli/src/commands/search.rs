use erg_core::error::ErgError;
use erg_core::{ErgDatabase, SearchOptions};

use crate::output;

pub fn run(
    db: &ErgDatabase,
    query: &str,
    limit: usize,
    class: Option<String>,
    tih_only: bool,
    json: bool,
) -> Result<(), ErgError> {
    let options = SearchOptions {
        limit,
        hazard_class: class,
        tih_only,
    };
    let results = db.search_with(query, &options);

    if json {
        output::json::print(&results)
    } else {
        output::table::print_materials(&results);
        Ok(())
    }
}
