use crate::database::ErgDatabase;
use crate::model::{Distance, ProtectiveDistance, SpillSize, TimeOfDay};
use crate::resolve::normalize::normalize_un;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Feet per meter as used by the guidebook conversions (3.28).
const FEET_PER_METER: Decimal = Decimal::from_parts(328, 0, 0, false, 2);
/// Miles per kilometer (0.621).
const MILES_PER_KM: Decimal = Decimal::from_parts(621, 0, 0, false, 3);

/// One selected reading of the TIH table, with imperial conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectiveAction {
    pub un_number: String,
    pub material_name: String,
    pub spill_size: SpillSize,
    pub time_of_day: TimeOfDay,
    pub isolation: Distance,
    pub protect_km: Decimal,
    pub protect_miles: Decimal,
    /// e.g. "ISOLATE 60m in all directions. Protect persons downwind for 1.1 km."
    pub action: String,
}

impl ErgDatabase {
    /// TIH protective distance entry for a UN number ("UN1017" and "1017" alike).
    pub fn get_protective_distance(&self, un: &str) -> Option<&ProtectiveDistance> {
        self.distance_index
            .get(normalize_un(un))
            .map(|&i| &self.distances[i])
    }

    /// Every entry of the TIH table, in dataset order.
    pub fn tih_distances(&self) -> &[ProtectiveDistance] {
        &self.distances
    }

    /// Select the reading for a spill size and time of day.
    ///
    /// `None` when the material has no TIH table entry.
    pub fn protective_action(
        &self,
        un: &str,
        spill: SpillSize,
        time: TimeOfDay,
    ) -> Option<ProtectiveAction> {
        let pd = self.get_protective_distance(un)?;
        let reading = pd.reading(spill, time);
        let material_name = self
            .un_index
            .get(&pd.un_number)
            .map(|&i| self.materials[i].name.clone())
            .unwrap_or_else(|| pd.name.clone());

        Some(ProtectiveAction {
            un_number: pd.un_number.clone(),
            material_name,
            spill_size: spill,
            time_of_day: time,
            isolation: Distance {
                meters: reading.isolate_meters,
                feet: meters_to_feet(reading.isolate_meters),
            },
            protect_km: reading.protect_km,
            protect_miles: km_to_miles(reading.protect_km),
            action: format!(
                "ISOLATE {}m in all directions. Protect persons downwind for {} km.",
                reading.isolate_meters, reading.protect_km
            ),
        })
    }
}

/// Meters to whole feet (x 3.28, rounded half to even).
pub fn meters_to_feet(meters: u32) -> u32 {
    (Decimal::from(meters) * FEET_PER_METER)
        .round()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// Kilometers to miles (x 0.621), one decimal place.
pub fn km_to_miles(km: Decimal) -> Decimal {
    (km * MILES_PER_KM).round_dp(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::reference;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(meters_to_feet(30), 98);
        assert_eq!(meters_to_feet(60), 197);
        assert_eq!(meters_to_feet(100), 328);
        assert_eq!(meters_to_feet(800), 2624);
        assert_eq!(meters_to_feet(0), 0);
        assert_eq!(km_to_miles(dec!(0.1)), dec!(0.1));
        assert_eq!(km_to_miles(dec!(1.1)), dec!(0.7));
        assert_eq!(km_to_miles(dec!(11.0)), dec!(6.8));
    }

    #[test]
    fn test_protective_distance_lookup() {
        let db = reference();
        let pd = db.get_protective_distance("UN1017").unwrap();
        assert_eq!(pd.name, "Chlorine");
        assert!(std::ptr::eq(pd, db.get_protective_distance("1017").unwrap()));
        // non-TIH and unknown alike
        assert!(db.get_protective_distance("1203").is_none());
        assert!(db.get_protective_distance("9999").is_none());
        assert!(db.get_protective_distance("").is_none());
    }

    #[test]
    fn test_tih_table_matches_flags() {
        let db = reference();
        for pd in db.tih_distances() {
            assert!(db.resolve(&pd.un_number).unwrap().is_tih);
        }
    }

    #[test]
    fn test_protective_action_chlorine() {
        let db = reference();
        let action = db
            .protective_action("1017", SpillSize::Small, TimeOfDay::Night)
            .unwrap();
        assert_eq!(action.material_name, "Chlorine");
        assert_eq!(action.isolation, Distance { meters: 60, feet: 197 });
        assert_eq!(action.protect_km, dec!(1.1));
        assert_eq!(action.protect_miles, dec!(0.7));
        assert_eq!(
            action.action,
            "ISOLATE 60m in all directions. Protect persons downwind for 1.1 km."
        );

        let large_day = db
            .protective_action("un1017", SpillSize::Large, TimeOfDay::Day)
            .unwrap();
        assert_eq!(large_day.isolation.meters, 500);
        assert_eq!(large_day.protect_km, dec!(3.0));
        assert!(large_day.action.ends_with("for 3.0 km."));
    }

    #[test]
    fn test_protective_action_non_tih() {
        let db = reference();
        assert!(db
            .protective_action("1203", SpillSize::Large, TimeOfDay::Night)
            .is_none());
    }

    #[test]
    fn test_protective_action_serializes_decimals_as_strings() {
        let db = reference();
        let action = db
            .protective_action("1079", SpillSize::Large, TimeOfDay::Night)
            .unwrap();
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["protect_km"], "11.0");
        assert_eq!(json["protect_miles"], "6.8");
        assert_eq!(json["spill_size"], "large");
        assert_eq!(json["time_of_day"], "night");
    }
}
