pub mod builtin;
pub mod schema;

use crate::error::ErgError;
use crate::resolve::normalize::{is_canonical_un, normalize_query};
use schema::ErgDataset;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Load a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<ErgDataset, ErgError> {
    let dataset = read_dataset(path)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset(json: &str, source: &Path) -> Result<ErgDataset, ErgError> {
    let dataset = deserialize_dataset(json, source)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Read and deserialize a dataset file without the integrity checks.
///
/// Read and parse failures both come back as [`ErgError::DatasetLoad`].
pub(crate) fn read_dataset(path: &Path) -> Result<ErgDataset, ErgError> {
    let content = std::fs::read_to_string(path).map_err(|e| ErgError::DatasetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    deserialize_dataset(&content, path)
}

fn deserialize_dataset(json: &str, source: &Path) -> Result<ErgDataset, ErgError> {
    serde_json::from_str(json).map_err(|e| ErgError::DatasetLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a dataset from a JSON string (no file path context).
pub fn parse_dataset_str(json: &str) -> Result<ErgDataset, ErgError> {
    let dataset: ErgDataset = serde_json::from_str(json).map_err(ErgError::Json)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Check every cross-table invariant of a dataset.
///
/// A dataset that passes can be indexed without any query-time fallbacks:
/// every material's guide exists, every protective-distance entry belongs to
/// a TIH material, and every alias points at a known UN number.
pub fn validate_dataset(dataset: &ErgDataset) -> Result<(), ErgError> {
    if dataset.version.trim().is_empty() {
        return Err(ErgError::DataIntegrity("version must not be empty".into()));
    }

    let mut classes = HashSet::new();
    for hc in &dataset.hazard_classes {
        if !(1..=9).contains(&hc.class) {
            return Err(ErgError::DataIntegrity(format!(
                "hazard class {} is outside 1-9",
                hc.class
            )));
        }
        if !classes.insert(hc.class) {
            return Err(ErgError::DataIntegrity(format!(
                "hazard class {} is defined more than once",
                hc.class
            )));
        }
    }

    let mut guides = HashSet::new();
    for guide in &dataset.guides {
        if guide.title.trim().is_empty() {
            return Err(ErgError::DataIntegrity(format!(
                "guide {} has an empty title",
                guide.number
            )));
        }
        if !guides.insert(guide.number) {
            return Err(ErgError::DataIntegrity(format!(
                "guide {} is defined more than once",
                guide.number
            )));
        }
    }

    if dataset.materials.is_empty() {
        return Err(ErgError::DataIntegrity("materials must not be empty".into()));
    }

    let mut tih_by_un: HashMap<&str, bool> = HashMap::new();
    for material in &dataset.materials {
        let un = material.un_number.as_str();
        if !is_canonical_un(un) {
            return Err(ErgError::DataIntegrity(format!(
                "material '{}' has malformed UN number '{}' (expected 4 digits)",
                material.name, un
            )));
        }
        if material.name.trim().is_empty() {
            return Err(ErgError::DataIntegrity(format!(
                "UN{} has an empty name",
                un
            )));
        }
        if tih_by_un.insert(un, material.is_tih).is_some() {
            return Err(ErgError::DataIntegrity(format!(
                "UN{} is listed more than once",
                un
            )));
        }
        if !guides.contains(&material.guide) {
            return Err(ErgError::DataIntegrity(format!(
                "UN{} ({}) references unknown guide {}",
                un, material.name, material.guide
            )));
        }
        match material.primary_class() {
            Some(class) if classes.contains(&class) => {}
            _ => {
                return Err(ErgError::DataIntegrity(format!(
                    "UN{} has unknown hazard class '{}'",
                    un, material.hazard_class
                )));
            }
        }
    }

    let mut distances = HashSet::new();
    for pd in &dataset.protective_distances {
        let un = pd.un_number.as_str();
        match tih_by_un.get(un) {
            None => {
                return Err(ErgError::DataIntegrity(format!(
                    "protective distance references unknown UN{}",
                    un
                )));
            }
            Some(false) => {
                return Err(ErgError::DataIntegrity(format!(
                    "protective distance references UN{}, which is not a TIH material",
                    un
                )));
            }
            Some(true) => {}
        }
        if !distances.insert(un) {
            return Err(ErgError::DataIntegrity(format!(
                "protective distance for UN{} is listed more than once",
                un
            )));
        }
    }

    let mut aliases = HashSet::new();
    for alias in &dataset.product_aliases {
        let key = normalize_query(&alias.alias);
        if key.is_empty() {
            return Err(ErgError::DataIntegrity("product alias must not be empty".into()));
        }
        if !tih_by_un.contains_key(alias.un_number.as_str()) {
            return Err(ErgError::DataIntegrity(format!(
                "product alias '{}' references unknown UN{}",
                alias.alias, alias.un_number
            )));
        }
        if !aliases.insert(key) {
            return Err(ErgError::DataIntegrity(format!(
                "product alias '{}' is listed more than once",
                alias.alias
            )));
        }
    }

    Ok(())
}
