pub mod normalize;
pub mod outcome;

use crate::database::ErgDatabase;
use crate::model::ErgMaterial;
use normalize::{normalize_query, normalize_un};
use outcome::{MatchKind, Resolution, SearchOptions};

impl ErgDatabase {
    /// Resolve a UN number or free-text product name to a material.
    pub fn resolve(&self, identifier: &str) -> Option<&ErgMaterial> {
        self.resolve_detailed(identifier).map(|r| r.material)
    }

    /// Resolve a UN number or product name, reporting which step matched.
    ///
    /// Order, first hit wins:
    /// 1. Normalized UN number (prefix "UN"/"NA" stripped)
    /// 2. Exact product alias
    /// 3. Product alias substring, in alias table order
    /// 4. Name or alternate-name substring, in material table order
    pub fn resolve_detailed(&self, identifier: &str) -> Option<Resolution<'_>> {
        let un = normalize_un(identifier);
        if !un.is_empty() {
            if let Some(&idx) = self.un_index.get(un) {
                tracing::debug!(identifier, un_number = un, "resolved by UN number");
                return Some(Resolution {
                    material: &self.materials[idx],
                    matched_by: MatchKind::UnNumber,
                    matched_term: un.to_string(),
                    other_candidates: Vec::new(),
                });
            }
        }
        // A bare "UN" or "NA" is still a product query
        self.resolve_product(identifier)
    }

    /// Resolve a free-text product name (no UN number step).
    pub fn resolve_product(&self, name: &str) -> Option<Resolution<'_>> {
        let query = normalize_query(name);
        if query.is_empty() {
            return None;
        }

        if let Some(&pos) = self.alias_lookup.get(&query) {
            let (key, idx) = &self.aliases[pos];
            tracing::debug!(query = %query, alias = %key, "resolved by product alias");
            return Some(Resolution {
                material: &self.materials[*idx],
                matched_by: MatchKind::AliasExact,
                matched_term: key.clone(),
                other_candidates: Vec::new(),
            });
        }

        if let Some(resolution) = self.match_alias_substring(&query) {
            return Some(resolution);
        }

        self.match_name_substring(&query)
    }

    fn match_alias_substring(&self, query: &str) -> Option<Resolution<'_>> {
        let mut hits = self
            .aliases
            .iter()
            .filter(|(key, _)| query.contains(key.as_str()) || key.contains(query));

        let (key, idx) = hits.next()?;
        let material = &self.materials[*idx];
        let mut others: Vec<String> = Vec::new();
        for (_, other) in hits {
            let un = &self.materials[*other].un_number;
            if *un != material.un_number && !others.contains(un) {
                others.push(un.clone());
            }
        }

        tracing::debug!(
            query,
            alias = %key,
            un_number = %material.un_number,
            "resolved by partial product alias"
        );
        if !others.is_empty() {
            tracing::debug!(query, candidates = ?others, "partial alias match is ambiguous");
        }

        Some(Resolution {
            material,
            matched_by: MatchKind::AliasSubstring,
            matched_term: key.clone(),
            other_candidates: others,
        })
    }

    fn match_name_substring(&self, query: &str) -> Option<Resolution<'_>> {
        let mut first: Option<Resolution<'_>> = None;
        let mut others = Vec::new();

        for (idx, keys) in self.material_keys.iter().enumerate() {
            let material = &self.materials[idx];
            let hit = if keys.name.contains(query) {
                Some((MatchKind::NameSubstring, material.name.clone()))
            } else {
                keys.alternates
                    .iter()
                    .position(|alt| alt.contains(query))
                    .map(|i| {
                        (
                            MatchKind::AlternateNameSubstring,
                            material.alternate_names[i].clone(),
                        )
                    })
            };
            let Some((matched_by, matched_term)) = hit else {
                continue;
            };
            if first.is_none() {
                first = Some(Resolution {
                    material,
                    matched_by,
                    matched_term,
                    other_candidates: Vec::new(),
                });
            } else {
                others.push(material.un_number.clone());
            }
        }

        let mut resolution = first?;
        tracing::debug!(
            query,
            un_number = %resolution.material.un_number,
            matched_by = %resolution.matched_by,
            "resolved by name"
        );
        if !others.is_empty() {
            tracing::debug!(query, candidates = ?others, "name match is ambiguous");
        }
        resolution.other_candidates = others;
        Some(resolution)
    }

    /// Materials whose UN number or name contains `query`, in table order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&ErgMaterial> {
        self.search_with(query, &SearchOptions::with_limit(limit))
    }

    /// Search with class and TIH filters. Product aliases are not consulted.
    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Vec<&ErgMaterial> {
        let text = normalize_query(query);
        if text.is_empty() {
            return Vec::new();
        }
        let un = normalize_un(query);
        let class_prefix = options
            .hazard_class
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        self.materials
            .iter()
            .zip(&self.material_keys)
            .filter(|(m, keys)| {
                (!un.is_empty() && m.un_number.contains(un))
                    || keys.name.contains(&text)
                    || keys.alternates.iter().any(|a| a.contains(&text))
            })
            .map(|(m, _)| m)
            .filter(|m| !options.tih_only || m.is_tih)
            .filter(|m| class_prefix.map_or(true, |p| m.hazard_class.starts_with(p)))
            .take(options.limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::reference;

    #[test]
    fn test_resolve_un_prefixes_identical() {
        let db = reference();
        let a = db.resolve("UN1203").unwrap();
        let b = db.resolve("un1203").unwrap();
        let c = db.resolve("1203").unwrap();
        let d = db.resolve("  un 1203 ").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(b, c));
        assert!(std::ptr::eq(c, d));
        assert_eq!(a.name, "Gasoline");
    }

    #[test]
    fn test_empty_identifier() {
        let db = reference();
        assert!(db.resolve("").is_none());
        assert!(db.resolve("   ").is_none());
        assert!(db.resolve_product("  ").is_none());
    }

    #[test]
    fn test_bare_prefix_falls_through_to_product_match() {
        let db = reference();
        let by_resolve = db.resolve("na").unwrap();
        let by_product = db.resolve_product("na").unwrap();
        assert!(std::ptr::eq(by_resolve, by_product.material));
        assert_eq!(by_resolve.un_number, "1268");

        let r = db.resolve_detailed("UN").unwrap();
        assert_eq!(r.material.un_number, "1203");
        assert_eq!(r.matched_by, MatchKind::AliasSubstring);
    }

    #[test]
    fn test_alias_exact_beats_name_order() {
        let db = reference();
        // "Petroleum sour crude oil" sits first in the table and contains both queries
        let r = db.resolve_detailed("crude oil").unwrap();
        assert_eq!(r.material.un_number, "1267");
        assert_eq!(r.matched_by, MatchKind::AliasExact);

        let r = db.resolve_detailed("Petrol").unwrap();
        assert_eq!(r.material.un_number, "1203");
        assert_eq!(r.matched_by, MatchKind::AliasExact);
        assert!(!r.is_ambiguous());
    }

    #[test]
    fn test_alias_substring() {
        let db = reference();
        let r = db.resolve_detailed("Diesel fuel #2").unwrap();
        assert_eq!(r.material.un_number, "1202");
        assert_eq!(r.matched_by, MatchKind::AliasSubstring);
        assert_eq!(r.matched_term, "diesel");
    }

    #[test]
    fn test_alias_substring_ambiguity_flagged() {
        let db = reference();
        let r = db.resolve_detailed("propane and butane mix").unwrap();
        assert_eq!(r.material.un_number, "1978");
        assert_eq!(r.matched_by, MatchKind::AliasSubstring);
        assert!(r.matched_by.is_fuzzy());
        assert_eq!(r.other_candidates, vec!["1011"]);
    }

    #[test]
    fn test_name_fallback_ambiguity_flagged() {
        let db = reference();
        let r = db.resolve_detailed("benzene").unwrap();
        assert_eq!(r.material.un_number, "1114");
        assert_eq!(r.matched_by, MatchKind::NameSubstring);
        assert_eq!(r.other_candidates, vec!["1294", "1307", "1547"]);
    }

    #[test]
    fn test_alternate_name_fallback() {
        let db = reference();
        let r = db.resolve_detailed("toluol").unwrap();
        assert_eq!(r.material.un_number, "1294");
        assert_eq!(r.matched_by, MatchKind::AlternateNameSubstring);
        assert_eq!(r.matched_term, "Toluol");
    }

    #[test]
    fn test_unknown_product() {
        let db = reference();
        assert!(db.resolve("unobtainium").is_none());
        assert!(db.resolve("9999").is_none());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let db = reference();
        for q in ["crude oil", "benzene", "propane and butane mix", "1017"] {
            let a = db.resolve(q).map(|m| &m.un_number);
            let b = db.resolve(q).map(|m| &m.un_number);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_search_limit_and_order() {
        let db = reference();
        let results = db.search("benzene", 5);
        assert!(results.len() <= 5);
        let uns: Vec<&str> = results.iter().map(|m| m.un_number.as_str()).collect();
        assert_eq!(uns, vec!["1114", "1294", "1307", "1547"]);
        assert_eq!(db.search("benzene", 2).len(), 2);
        assert!(db.search("benzene", 0).is_empty());
    }

    #[test]
    fn test_search_skips_aliases() {
        let db = reference();
        // "ulsd" is only an alias key
        assert!(db.search("ulsd", 20).is_empty());
        assert!(db.resolve("ulsd").is_some());
    }

    #[test]
    fn test_search_by_un_fragment() {
        let db = reference();
        let results = db.search("UN1017", 20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Chlorine");
        assert!(db.search("   ", 20).is_empty());
    }

    #[test]
    fn test_search_filters() {
        let db = reference();
        let opts = SearchOptions {
            tih_only: true,
            ..SearchOptions::default()
        };
        let tih = db.search_with("hydrogen", &opts);
        assert!(!tih.is_empty());
        assert!(tih.iter().all(|m| m.is_tih));

        let opts = SearchOptions {
            hazard_class: Some("2".into()),
            ..SearchOptions::default()
        };
        let gases = db.search_with("hydrogen", &opts);
        assert!(gases.iter().all(|m| m.hazard_class.starts_with('2')));
        assert!(gases.iter().any(|m| m.un_number == "1049"));
        assert!(!gases.iter().any(|m| m.un_number == "1052"));
    }
}
