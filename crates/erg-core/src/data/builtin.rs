use super::schema::ErgDataset;
use crate::database::ErgDatabase;
use crate::error::ErgError;
use std::sync::LazyLock;

const HAZARD_CLASSES_JSON: &str = include_str!("../../../../data/hazard-classes.json");
const GUIDES_JSON: &str = include_str!("../../../../data/erg-guides.json");
const MATERIALS_JSON: &str = include_str!("../../../../data/erg-materials.json");
const TIH_DISTANCES_JSON: &str = include_str!("../../../../data/tih-distances.json");
const CONTACTS_JSON: &str = include_str!("../../../../data/emergency-contacts.json");
const ALIASES_JSON: &str = include_str!("../../../../data/product-aliases.json");

/// Edition of the embedded guidebook tables.
pub const DATASET_VERSION: &str = "ERG2024";

static REFERENCE: LazyLock<ErgDatabase> =
    LazyLock::new(|| load().expect("embedded ERG dataset is valid"));

/// Assemble the embedded tables into one dataset.
pub fn builtin_dataset() -> Result<ErgDataset, ErgError> {
    Ok(ErgDataset {
        version: DATASET_VERSION.into(),
        description: Some("Emergency Response Guidebook 2024 (petroleum and oilfield subset)".into()),
        hazard_classes: serde_json::from_str(HAZARD_CLASSES_JSON)?,
        guides: serde_json::from_str(GUIDES_JSON)?,
        materials: serde_json::from_str(MATERIALS_JSON)?,
        protective_distances: serde_json::from_str(TIH_DISTANCES_JSON)?,
        emergency_contacts: serde_json::from_str(CONTACTS_JSON)?,
        product_aliases: serde_json::from_str(ALIASES_JSON)?,
    })
}

/// Build a fresh database from the embedded tables.
///
/// Most callers want [`reference`], which builds once per process.
pub fn load() -> Result<ErgDatabase, ErgError> {
    ErgDatabase::new(builtin_dataset()?)
}

/// The process-wide built-in database.
pub fn reference() -> &'static ErgDatabase {
    &REFERENCE
}
