use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sub-code within a primary hazard class (e.g. "2.3" Toxic gases).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub code: String,
    pub description: String,
}

/// Primary DOT/UN hazard class 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardClass {
    pub class: u8,
    pub name: String,
    /// Display color (hex) used by placard-style UI.
    pub color: String,
    #[serde(default)]
    pub divisions: Vec<Division>,
}

/// A distance given in both metric and imperial units, as printed in the guidebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    pub meters: u32,
    pub feet: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialHazards {
    #[serde(default)]
    pub fire_explosion: Vec<String>,
    #[serde(default)]
    pub health: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicSafety {
    /// Initial isolation distance in all directions.
    pub isolation: Distance,
    /// Isolation distance when a tank, rail car or tank truck is involved in a fire.
    pub fire_isolation: Distance,
    pub protective_clothing: String,
    pub evacuation_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireResponse {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub large: Vec<String>,
    #[serde(default)]
    pub tank: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpillResponse {
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub large: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyResponse {
    pub fire: FireResponse,
    pub spill_leak: SpillResponse,
    pub first_aid: String,
}

/// An orange-section guide of the Emergency Response Guidebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErgGuide {
    /// Guide number (the "G" code, e.g. 128).
    pub number: u16,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    pub potential_hazards: PotentialHazards,
    pub public_safety: PublicSafety,
    pub emergency_response: EmergencyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackingGroup {
    I,
    II,
    III,
}

impl fmt::Display for PackingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackingGroup::I => write!(f, "I"),
            PackingGroup::II => write!(f, "II"),
            PackingGroup::III => write!(f, "III"),
        }
    }
}

/// A material listed in the guidebook's UN/NA index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErgMaterial {
    /// Canonical zero-padded 4-digit UN/NA number.
    pub un_number: String,
    pub name: String,
    /// Guide number; always present in the guide table of the owning dataset.
    pub guide: u16,
    /// Hazard class or division as printed on the placard (e.g. "3", "2.3", "1.5D").
    pub hazard_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_group: Option<PackingGroup>,
    #[serde(default)]
    pub is_tih: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_water_reactive: Option<bool>,
    /// Guide printed with a "P" suffix: the material may polymerize violently.
    #[serde(default)]
    pub polymerization_hazard: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_names: Vec<String>,
}

impl ErgMaterial {
    /// Primary hazard class number parsed from the class string ("2.3" -> 2, "1.5D" -> 1).
    pub fn primary_class(&self) -> Option<u8> {
        let head = self
            .hazard_class
            .split('.')
            .next()
            .unwrap_or_default()
            .trim();
        head.parse().ok()
    }

    /// Guide number as printed in the index, e.g. "128" or "119P".
    pub fn guide_label(&self) -> String {
        if self.polymerization_hazard {
            format!("{}P", self.guide)
        } else {
            self.guide.to_string()
        }
    }
}

/// One reading of the TIH table: isolation radius plus downwind protective-action distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceReading {
    pub isolate_meters: u32,
    pub protect_km: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpillDistances {
    pub day: DistanceReading,
    pub night: DistanceReading,
}

impl SpillDistances {
    pub fn at(&self, time: TimeOfDay) -> &DistanceReading {
        match time {
            TimeOfDay::Day => &self.day,
            TimeOfDay::Night => &self.night,
        }
    }
}

/// Table of Initial Isolation and Protective Action Distances entry for a TIH material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectiveDistance {
    pub un_number: String,
    pub name: String,
    pub small_spill: SpillDistances,
    pub large_spill: SpillDistances,
}

impl ProtectiveDistance {
    pub fn reading(&self, spill: SpillSize, time: TimeOfDay) -> &DistanceReading {
        match spill {
            SpillSize::Small => self.small_spill.at(time),
            SpillSize::Large => self.large_spill.at(time),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpillSize {
    Small,
    Large,
}

impl fmt::Display for SpillSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpillSize::Small => write!(f, "small"),
            SpillSize::Large => write!(f, "large"),
        }
    }
}

impl SpillSize {
    /// Parse loosely; anything that is not recognizably "small" is read as a large spill.
    pub fn from_str_loose(s: &str) -> SpillSize {
        if s.trim().to_lowercase().starts_with("small") {
            SpillSize::Small
        } else {
            SpillSize::Large
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => write!(f, "day"),
            TimeOfDay::Night => write!(f, "night"),
        }
    }
}

impl TimeOfDay {
    /// Parse loosely; anything that is not recognizably daytime is read as night.
    pub fn from_str_loose(s: &str) -> TimeOfDay {
        if s.trim().to_lowercase().starts_with("day") {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }
}

/// A regulatory or industry emergency hotline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default = "default_true")]
    pub is_24_hour: bool,
    /// Lower sorts first.
    #[serde(default = "default_priority")]
    pub priority: u32,
}

fn default_true() -> bool {
    true
}

fn default_priority() -> u32 {
    100
}

/// Colloquial product name mapped to a canonical UN number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAlias {
    pub alias: String,
    pub un_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn material(class: &str) -> ErgMaterial {
        ErgMaterial {
            un_number: "1203".into(),
            name: "Gasoline".into(),
            guide: 128,
            hazard_class: class.into(),
            packing_group: Some(PackingGroup::II),
            is_tih: false,
            is_water_reactive: None,
            polymerization_hazard: false,
            alternate_names: vec![],
        }
    }

    #[test]
    fn test_primary_class() {
        assert_eq!(material("3").primary_class(), Some(3));
        assert_eq!(material("2.3").primary_class(), Some(2));
        assert_eq!(material("1.5D").primary_class(), Some(1));
        assert_eq!(material("Combustible").primary_class(), None);
    }

    #[test]
    fn test_guide_label_polymerization() {
        let mut m = material("2.3");
        m.guide = 119;
        assert_eq!(m.guide_label(), "119");
        m.polymerization_hazard = true;
        assert_eq!(m.guide_label(), "119P");
    }

    #[test]
    fn test_loose_spill_and_time_parsing() {
        assert_eq!(SpillSize::from_str_loose(" Small "), SpillSize::Small);
        assert_eq!(SpillSize::from_str_loose("large"), SpillSize::Large);
        assert_eq!(SpillSize::from_str_loose("huge"), SpillSize::Large);
        assert_eq!(TimeOfDay::from_str_loose("DAY"), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_str_loose("daytime"), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_str_loose("dusk"), TimeOfDay::Night);
    }

    #[test]
    fn test_reading_selection() {
        let pd = ProtectiveDistance {
            un_number: "1017".into(),
            name: "Chlorine".into(),
            small_spill: SpillDistances {
                day: DistanceReading {
                    isolate_meters: 60,
                    protect_km: dec!(0.3),
                },
                night: DistanceReading {
                    isolate_meters: 60,
                    protect_km: dec!(1.1),
                },
            },
            large_spill: SpillDistances {
                day: DistanceReading {
                    isolate_meters: 500,
                    protect_km: dec!(3.0),
                },
                night: DistanceReading {
                    isolate_meters: 500,
                    protect_km: dec!(7.9),
                },
            },
        };
        assert_eq!(
            pd.reading(SpillSize::Small, TimeOfDay::Night).protect_km,
            dec!(1.1)
        );
        assert_eq!(
            pd.reading(SpillSize::Large, TimeOfDay::Day).isolate_meters,
            500
        );
    }

    #[test]
    fn test_packing_group_serde() {
        let json = serde_json::to_string(&PackingGroup::III).unwrap();
        assert_eq!(json, "\"III\"");
        let pg: PackingGroup = serde_json::from_str("\"I\"").unwrap();
        assert_eq!(pg, PackingGroup::I);
    }
}
