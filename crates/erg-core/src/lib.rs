pub mod data;
pub mod database;
pub mod distance;
pub mod error;
pub mod facade;
pub mod guide;
pub mod model;
pub mod resolve;

pub use database::{DatabaseStats, ErgDatabase};
pub use distance::ProtectiveAction;
pub use error::ErgError;
pub use facade::{ErgInfo, QuickLookup, CHEMTREC_PHONE};
pub use guide::render_guide_text;
pub use resolve::outcome::{MatchKind, Resolution, SearchOptions, DEFAULT_SEARCH_LIMIT};

use model::{ErgGuide, ErgMaterial, ProtectiveDistance};

/// Resolve a UN number or product name against the built-in ERG 2024 tables.
pub fn resolve(identifier: &str) -> Option<&'static ErgMaterial> {
    data::builtin::reference().resolve(identifier)
}

/// Materials whose UN number or name contains `query`, up to `limit`.
pub fn search(query: &str, limit: usize) -> Vec<&'static ErgMaterial> {
    data::builtin::reference().search(query, limit)
}

pub fn get_guide(number: u16) -> Option<&'static ErgGuide> {
    data::builtin::reference().get_guide(number)
}

pub fn get_protective_distance(un: &str) -> Option<&'static ProtectiveDistance> {
    data::builtin::reference().get_protective_distance(un)
}

/// Material, guide and (for TIH materials) protective distances for a UN number.
pub fn full_erg_info(un: &str) -> Option<ErgInfo<'static>> {
    data::builtin::reference().full_erg_info(un)
}

/// Same as [`full_erg_info`], starting from a shipped product name.
pub fn erg_for_product(name: &str) -> Option<ErgInfo<'static>> {
    data::builtin::reference().erg_for_product(name)
}
