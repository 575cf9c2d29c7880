use crate::data::schema::ErgDataset;
use crate::data::{read_dataset, validate_dataset};
use crate::error::ErgError;
use crate::model::{EmergencyContact, ErgGuide, ErgMaterial, HazardClass, ProtectiveDistance};
use crate::resolve::normalize::normalize_query;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Lower-cased search keys for one material, kept parallel to the material table.
#[derive(Debug, Clone)]
pub(crate) struct MaterialKeys {
    pub(crate) name: String,
    pub(crate) alternates: Vec<String>,
}

/// Indexed, read-only view over a validated [`ErgDataset`].
///
/// All query methods take `&self` and never allocate shared state, so one
/// database can be used from any number of threads at once.
#[derive(Debug, Clone)]
pub struct ErgDatabase {
    pub(crate) version: String,
    pub(crate) description: Option<String>,
    pub(crate) hazard_classes: Vec<HazardClass>,
    /// Sorted by guide number.
    pub(crate) guides: Vec<ErgGuide>,
    pub(crate) guide_index: HashMap<u16, usize>,
    /// In dataset order; fuzzy matching depends on it.
    pub(crate) materials: Vec<ErgMaterial>,
    pub(crate) material_keys: Vec<MaterialKeys>,
    /// Position of each material's guide in `guides`.
    pub(crate) material_guides: Vec<usize>,
    pub(crate) un_index: HashMap<String, usize>,
    pub(crate) distances: Vec<ProtectiveDistance>,
    pub(crate) distance_index: HashMap<String, usize>,
    /// (lower-cased alias, material position) in dataset order.
    pub(crate) aliases: Vec<(String, usize)>,
    pub(crate) alias_lookup: HashMap<String, usize>,
    /// Sorted by priority, then country.
    pub(crate) contacts: Vec<EmergencyContact>,
}

/// Row counts of a loaded database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    pub version: String,
    pub materials: usize,
    pub guides: usize,
    pub tih_materials: usize,
    pub protective_distances: usize,
    pub emergency_contacts: usize,
    pub product_aliases: usize,
}

impl ErgDatabase {
    /// Validate a dataset and build its lookup indexes.
    pub fn new(dataset: ErgDataset) -> Result<Self, ErgError> {
        // Indexing below relies on every guide and alias target existing
        validate_dataset(&dataset)?;

        let ErgDataset {
            version,
            description,
            mut hazard_classes,
            mut guides,
            materials,
            protective_distances,
            mut emergency_contacts,
            product_aliases,
        } = dataset;

        hazard_classes.sort_by_key(|hc| hc.class);
        guides.sort_by_key(|g| g.number);
        emergency_contacts.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.country.cmp(&b.country))
        });

        let guide_index: HashMap<u16, usize> = guides
            .iter()
            .enumerate()
            .map(|(i, g)| (g.number, i))
            .collect();

        let mut un_index = HashMap::with_capacity(materials.len());
        let mut material_keys = Vec::with_capacity(materials.len());
        let mut material_guides = Vec::with_capacity(materials.len());
        for (i, m) in materials.iter().enumerate() {
            un_index.insert(m.un_number.clone(), i);
            material_keys.push(MaterialKeys {
                name: m.name.to_lowercase(),
                alternates: m.alternate_names.iter().map(|a| a.to_lowercase()).collect(),
            });
            material_guides.push(guide_index[&m.guide]);
        }

        let distance_index: HashMap<String, usize> = protective_distances
            .iter()
            .enumerate()
            .map(|(i, pd)| (pd.un_number.clone(), i))
            .collect();

        let mut aliases = Vec::with_capacity(product_aliases.len());
        let mut alias_lookup = HashMap::with_capacity(product_aliases.len());
        for alias in &product_aliases {
            let key = normalize_query(&alias.alias);
            let idx = un_index[&alias.un_number];
            alias_lookup.insert(key.clone(), aliases.len());
            aliases.push((key, idx));
        }

        for m in materials.iter().filter(|m| m.is_tih) {
            if !distance_index.contains_key(&m.un_number) {
                tracing::warn!(
                    un_number = %m.un_number,
                    name = %m.name,
                    "TIH material has no protective distance entry"
                );
            }
        }

        let db = ErgDatabase {
            version,
            description,
            hazard_classes,
            guides,
            guide_index,
            materials,
            material_keys,
            material_guides,
            un_index,
            distances: protective_distances,
            distance_index,
            aliases,
            alias_lookup,
            contacts: emergency_contacts,
        };

        tracing::info!(
            version = %db.version,
            materials = db.materials.len(),
            guides = db.guides.len(),
            protective_distances = db.distances.len(),
            aliases = db.aliases.len(),
            "ERG dataset loaded"
        );

        Ok(db)
    }

    /// Load, validate and index a dataset file.
    pub fn from_path(path: &Path) -> Result<Self, ErgError> {
        Self::new(read_dataset(path)?)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All materials in dataset order.
    pub fn materials(&self) -> &[ErgMaterial] {
        &self.materials
    }

    pub fn hazard_classes(&self) -> &[HazardClass] {
        &self.hazard_classes
    }

    pub fn hazard_class(&self, class: u8) -> Option<&HazardClass> {
        self.hazard_classes.iter().find(|hc| hc.class == class)
    }

    /// Primary hazard class of a material ("2.3" resolves to class 2).
    pub fn hazard_class_for(&self, material: &ErgMaterial) -> Option<&HazardClass> {
        material.primary_class().and_then(|c| self.hazard_class(c))
    }

    /// Emergency contacts ordered by priority then country, optionally
    /// restricted to countries containing `country` (case-insensitive).
    pub fn contacts(&self, country: Option<&str>) -> Vec<&EmergencyContact> {
        let needle = country.map(normalize_query).filter(|c| !c.is_empty());
        self.contacts
            .iter()
            .filter(|c| {
                needle
                    .as_deref()
                    .map_or(true, |n| c.country.to_lowercase().contains(n))
            })
            .collect()
    }

    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            version: self.version.clone(),
            materials: self.materials.len(),
            guides: self.guides.len(),
            tih_materials: self.materials.iter().filter(|m| m.is_tih).count(),
            protective_distances: self.distances.len(),
            emergency_contacts: self.contacts.len(),
            product_aliases: self.aliases.len(),
        }
    }

    /// Guide of the material at `idx` in the material table.
    pub(crate) fn guide_of(&self, idx: usize) -> &ErgGuide {
        &self.guides[self.material_guides[idx]]
    }
}
