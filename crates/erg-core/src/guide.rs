use crate::database::ErgDatabase;
use crate::model::{ErgGuide, ErgMaterial};
use serde::Serialize;
use std::fmt::Write;

/// One line of the guide catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideSummary {
    pub number: u16,
    pub title: String,
    pub color: String,
    pub isolation_meters: u32,
}

/// A page of materials that reference one guide.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialPage<'a> {
    pub guide_number: u16,
    pub total_materials: usize,
    pub offset: usize,
    pub limit: usize,
    pub materials: Vec<&'a ErgMaterial>,
}

impl ErgDatabase {
    /// Guide by number.
    pub fn get_guide(&self, number: u16) -> Option<&ErgGuide> {
        self.guide_index.get(&number).map(|&i| &self.guides[i])
    }

    /// All guides ordered by number.
    pub fn guides(&self) -> &[ErgGuide] {
        &self.guides
    }

    pub fn guide_summaries(&self) -> Vec<GuideSummary> {
        self.guides
            .iter()
            .map(|g| GuideSummary {
                number: g.number,
                title: g.title.clone(),
                color: g.color.clone(),
                isolation_meters: g.public_safety.isolation.meters,
            })
            .collect()
    }

    /// Materials referencing `number`, in table order, paged by `offset`/`limit`.
    ///
    /// Returns `None` for a guide number that is not in the dataset.
    pub fn materials_for_guide(
        &self,
        number: u16,
        offset: usize,
        limit: usize,
    ) -> Option<MaterialPage<'_>> {
        let guide_idx = *self.guide_index.get(&number)?;
        let matching: Vec<&ErgMaterial> = self
            .materials
            .iter()
            .zip(&self.material_guides)
            .filter(|(_, g)| **g == guide_idx)
            .map(|(m, _)| m)
            .collect();

        Some(MaterialPage {
            guide_number: number,
            total_materials: matching.len(),
            offset,
            limit,
            materials: matching.into_iter().skip(offset).take(limit).collect(),
        })
    }
}

/// Render a guide as plain text, one section per heading.
pub fn render_guide_text(guide: &ErgGuide) -> String {
    let mut out = String::new();
    let _ = write!(out, "GUIDE {} - {}", guide.number, guide.title);

    let hazards = &guide.potential_hazards;
    push_section(&mut out, "FIRE OR EXPLOSION", &hazards.fire_explosion);
    push_section(&mut out, "HEALTH", &hazards.health);

    let safety = &guide.public_safety;
    out.push_str("\n\nEVACUATION");
    let _ = write!(
        out,
        "\n- Initial isolation: {} m ({} ft)",
        safety.isolation.meters, safety.isolation.feet
    );
    let _ = write!(
        out,
        "\n- Fire isolation: {} m ({} ft)",
        safety.fire_isolation.meters, safety.fire_isolation.feet
    );
    if !safety.evacuation_notes.trim().is_empty() {
        let _ = write!(out, "\n- {}", safety.evacuation_notes.trim());
    }

    if !safety.protective_clothing.trim().is_empty() {
        let _ = write!(out, "\n\nPROTECTIVE CLOTHING\n{}", safety.protective_clothing.trim());
    }

    let response = &guide.emergency_response;
    out.push_str("\n\nEMERGENCY RESPONSE");

    let fire = &response.fire;
    if !(fire.small.is_empty() && fire.large.is_empty() && fire.tank.is_empty()) {
        out.push_str("\n\nFIRE");
        for (label, items) in [("small", &fire.small), ("large", &fire.large), ("tank", &fire.tank)] {
            for item in items {
                let _ = write!(out, "\n- {label}: {item}");
            }
        }
    }

    let spill = &response.spill_leak;
    if !(spill.general.is_empty() && spill.small.is_empty() && spill.large.is_empty()) {
        out.push_str("\n\nSPILL OR LEAK");
        for item in &spill.general {
            let _ = write!(out, "\n- {item}");
        }
        for (label, items) in [("small", &spill.small), ("large", &spill.large)] {
            for item in items {
                let _ = write!(out, "\n- {label}: {item}");
            }
        }
    }

    if !response.first_aid.trim().is_empty() {
        let _ = write!(out, "\n\nFIRST AID\n{}", response.first_aid.trim());
    }

    out.push('\n');
    out
}

fn push_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = write!(out, "\n\n{heading}");
    for item in items {
        let _ = write!(out, "\n- {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin::reference;

    #[test]
    fn test_every_material_guide_resolves() {
        let db = reference();
        for m in db.materials() {
            let guide = db.get_guide(m.guide);
            assert!(guide.is_some(), "UN{} -> guide {}", m.un_number, m.guide);
        }
        assert!(db.get_guide(999).is_none());
        assert!(db.get_guide(0).is_none());
    }

    #[test]
    fn test_summaries_ordered() {
        let db = reference();
        let summaries = db.guide_summaries();
        assert_eq!(summaries.len(), db.guides().len());
        assert_eq!(summaries[0].number, 111);
        assert!(summaries.windows(2).all(|w| w[0].number < w[1].number));
        let g128 = summaries.iter().find(|s| s.number == 128).unwrap();
        assert_eq!(g128.isolation_meters, 50);
    }

    #[test]
    fn test_materials_for_guide_paging() {
        let db = reference();
        let page = db.materials_for_guide(128, 0, 100).unwrap();
        assert!(page.total_materials > 3);
        assert_eq!(page.materials.len(), page.total_materials);
        assert!(page.materials.iter().all(|m| m.guide == 128));
        // table order: crude oil first
        assert_eq!(page.materials[0].un_number, "1267");

        let second = db.materials_for_guide(128, 2, 2).unwrap();
        assert_eq!(second.total_materials, page.total_materials);
        assert_eq!(second.materials.len(), 2);
        assert_eq!(second.materials[0].un_number, page.materials[2].un_number);

        let past_end = db.materials_for_guide(128, 1000, 10).unwrap();
        assert!(past_end.materials.is_empty());

        assert!(db.materials_for_guide(999, 0, 10).is_none());
    }

    #[test]
    fn test_render_guide_text() {
        let db = reference();
        let guide = db.get_guide(128).unwrap();
        let text = render_guide_text(guide);
        assert!(text.starts_with("GUIDE 128 - Flammable Liquids (Water-Immiscible)"));
        for heading in [
            "\n\nFIRE OR EXPLOSION\n",
            "\n\nHEALTH\n",
            "\n\nEVACUATION\n- Initial isolation: 50 m",
            "\n\nPROTECTIVE CLOTHING\n",
            "\n\nEMERGENCY RESPONSE",
            "\n\nFIRE\n- small: ",
            "\n\nSPILL OR LEAK\n",
            "\n\nFIRST AID\n",
        ] {
            assert!(text.contains(heading), "missing {heading:?}");
        }
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
}
