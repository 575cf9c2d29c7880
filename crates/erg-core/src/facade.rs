use crate::database::ErgDatabase;
use crate::distance::ProtectiveAction;
use crate::model::{
    Distance, ErgGuide, ErgMaterial, HazardClass, ProtectiveDistance, SpillSize, TimeOfDay,
};
use crate::resolve::normalize::normalize_un;
use serde::Serialize;

/// CHEMTREC 24-hour emergency line.
pub const CHEMTREC_PHONE: &str = "1-800-424-9300";

/// Guide used when the cargo cannot be identified.
pub const UNIDENTIFIED_CARGO_GUIDE: u16 = 111;

/// Everything the guidebook says about one material.
#[derive(Debug, Clone, Serialize)]
pub struct ErgInfo<'a> {
    pub material: &'a ErgMaterial,
    pub guide: &'a ErgGuide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_class: Option<&'a HazardClass>,
    /// Present only for TIH materials listed in the distance table.
    pub protective_distance: Option<&'a ProtectiveDistance>,
}

/// Result of an emergency quick lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuickLookup {
    Identified(QuickReference),
    UnknownMaterial(UnidentifiedCargo),
}

/// First-minutes reference card for an identified material.
#[derive(Debug, Clone, Serialize)]
pub struct QuickReference {
    pub un_number: String,
    pub name: String,
    pub guide: u16,
    pub guide_label: String,
    pub guide_title: String,
    pub hazard_class: String,
    pub is_tih: bool,
    pub isolation: Distance,
    pub fire_isolation: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protective_action: Option<ProtectiveAction>,
    pub call_chemtrec: String,
}

/// Standing orders for unidentified cargo.
#[derive(Debug, Clone, Serialize)]
pub struct UnidentifiedCargo {
    pub queried: String,
    pub guide: u16,
    pub guide_title: String,
    pub isolation: Distance,
    pub fire_isolation_meters: u32,
    pub immediate_actions: Vec<String>,
    pub call_chemtrec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_details: Option<ErgGuide>,
}

impl ErgDatabase {
    /// Full record for an exact UN number; no product-name matching.
    pub fn full_erg_info(&self, un: &str) -> Option<ErgInfo<'_>> {
        let idx = *self.un_index.get(normalize_un(un))?;
        let material = &self.materials[idx];
        let protective_distance = if material.is_tih {
            self.get_protective_distance(&material.un_number)
        } else {
            None
        };

        Some(ErgInfo {
            material,
            guide: self.guide_of(idx),
            hazard_class: self.hazard_class_for(material),
            protective_distance,
        })
    }

    /// Resolve a product name (aliases, then names) and return its full record.
    pub fn erg_for_product(&self, name: &str) -> Option<ErgInfo<'_>> {
        let resolution = self.resolve_product(name)?;
        self.full_erg_info(&resolution.material.un_number)
    }

    /// Emergency card for a UN number, falling back to guide 111 when unknown.
    pub fn quick_lookup(&self, un: &str, spill: SpillSize, time: TimeOfDay) -> QuickLookup {
        let Some(info) = self.full_erg_info(un) else {
            tracing::debug!(un, "quick lookup for unidentified material");
            return QuickLookup::UnknownMaterial(self.unidentified_cargo(un));
        };

        let protective_action = if info.material.is_tih {
            self.protective_action(&info.material.un_number, spill, time)
        } else {
            None
        };

        QuickLookup::Identified(QuickReference {
            un_number: info.material.un_number.clone(),
            name: info.material.name.clone(),
            guide: info.guide.number,
            guide_label: info.material.guide_label(),
            guide_title: info.guide.title.clone(),
            hazard_class: info.material.hazard_class.clone(),
            is_tih: info.material.is_tih,
            isolation: info.guide.public_safety.isolation,
            fire_isolation: info.guide.public_safety.fire_isolation,
            protective_action,
            call_chemtrec: CHEMTREC_PHONE.into(),
        })
    }

    fn unidentified_cargo(&self, queried: &str) -> UnidentifiedCargo {
        let guide = self.get_guide(UNIDENTIFIED_CARGO_GUIDE);
        UnidentifiedCargo {
            queried: queried.trim().to_string(),
            guide: UNIDENTIFIED_CARGO_GUIDE,
            guide_title: guide
                .map(|g| g.title.clone())
                .unwrap_or_else(|| "Mixed Load/Unidentified Cargo".into()),
            isolation: Distance {
                meters: 100,
                feet: 330,
            },
            fire_isolation_meters: 800,
            immediate_actions: vec![
                "ISOLATE 100m (330 ft) in all directions".into(),
                format!("Call CHEMTREC: {CHEMTREC_PHONE}"),
                "Wear SCBA and protective equipment".into(),
                "Eliminate ignition sources".into(),
            ],
            call_chemtrec: CHEMTREC_PHONE.into(),
            guide_details: guide.cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::reference;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_erg_info_non_tih() {
        let db = reference();
        let info = db.full_erg_info("UN1203").unwrap();
        assert_eq!(info.material.name, "Gasoline");
        assert_eq!(info.guide.number, 128);
        assert_eq!(info.hazard_class.unwrap().class, 3);
        assert!(info.protective_distance.is_none());
    }

    #[test]
    fn test_full_erg_info_tih() {
        let db = reference();
        let info = db.full_erg_info("1005").unwrap();
        assert_eq!(info.guide.number, 125);
        let pd = info.protective_distance.unwrap();
        assert_eq!(pd.un_number, "1005");
    }

    #[test]
    fn test_full_erg_info_exact_only() {
        let db = reference();
        assert!(db.full_erg_info("9999").is_none());
        assert!(db.full_erg_info("gasoline").is_none());
        assert!(db.full_erg_info("").is_none());
    }

    #[test]
    fn test_erg_for_product() {
        let db = reference();
        let info = db.erg_for_product("Sour Crude").unwrap();
        assert_eq!(info.material.un_number, "3494");
        assert_eq!(info.guide.number, 131);
        let pd = info.protective_distance.unwrap();
        assert_eq!(pd.small_spill.day.isolate_meters, 30);

        assert!(db.erg_for_product("").is_none());
        assert!(db.erg_for_product("unobtainium").is_none());
    }

    #[test]
    fn test_quick_lookup_identified_tih() {
        let db = reference();
        match db.quick_lookup("UN1017", SpillSize::Large, TimeOfDay::Night) {
            QuickLookup::Identified(card) => {
                assert_eq!(card.name, "Chlorine");
                assert_eq!(card.guide, 124);
                assert!(card.is_tih);
                assert_eq!(card.isolation.meters, 100);
                let action = card.protective_action.unwrap();
                assert_eq!(action.protect_km, dec!(7.9));
                assert_eq!(card.call_chemtrec, CHEMTREC_PHONE);
            }
            other => panic!("expected identified, got {other:?}"),
        }
    }

    #[test]
    fn test_quick_lookup_identified_non_tih() {
        let db = reference();
        match db.quick_lookup("1203", SpillSize::Large, TimeOfDay::Day) {
            QuickLookup::Identified(card) => {
                assert_eq!(card.guide_title, "Flammable Liquids (Water-Immiscible)");
                assert_eq!(card.isolation.meters, 50);
                assert_eq!(card.fire_isolation.meters, 800);
                assert!(card.protective_action.is_none());
            }
            other => panic!("expected identified, got {other:?}"),
        }
    }

    #[test]
    fn test_quick_lookup_unknown() {
        let db = reference();
        let result = db.quick_lookup("UN9999", SpillSize::Small, TimeOfDay::Day);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "UNKNOWN_MATERIAL");
        match result {
            QuickLookup::UnknownMaterial(cargo) => {
                assert_eq!(cargo.guide, 111);
                assert_eq!(cargo.guide_title, "Mixed Load/Unidentified Cargo");
                assert_eq!(cargo.isolation, Distance { meters: 100, feet: 330 });
                assert_eq!(cargo.fire_isolation_meters, 800);
                assert_eq!(cargo.immediate_actions.len(), 4);
                assert_eq!(
                    cargo.immediate_actions[1],
                    "Call CHEMTREC: 1-800-424-9300"
                );
                assert!(cargo.guide_details.is_some());
            }
            other => panic!("expected unknown material, got {other:?}"),
        }
    }

    #[test]
    fn test_erg_info_serializes() {
        let db = reference();
        let json = serde_json::to_value(db.full_erg_info("1203").unwrap()).unwrap();
        assert_eq!(json["material"]["un_number"], "1203");
        assert_eq!(json["guide"]["number"], 128);
        assert!(json["protective_distance"].is_null());
    }
}
