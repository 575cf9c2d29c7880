use crate::model::{EmergencyContact, ErgGuide, ErgMaterial, HazardClass, ProductAlias, ProtectiveDistance};
use serde::{Deserialize, Serialize};

/// A complete ERG reference dataset as stored on disk.
///
/// Table order is significant: materials and product aliases are matched
/// first-hit-wins in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErgDataset {
    /// Version tag (e.g., "ERG2024").
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub hazard_classes: Vec<HazardClass>,
    pub guides: Vec<ErgGuide>,
    pub materials: Vec<ErgMaterial>,
    #[serde(default)]
    pub protective_distances: Vec<ProtectiveDistance>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(default)]
    pub product_aliases: Vec<ProductAlias>,
}
