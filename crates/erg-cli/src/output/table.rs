use erg_core::database::DatabaseStats;
use erg_core::facade::{QuickReference, UnidentifiedCargo};
use erg_core::guide::GuideSummary;
use erg_core::model::{
    DistanceReading, EmergencyContact, ErgMaterial, HazardClass, ProtectiveDistance,
};
use erg_core::{ErgDatabase, ErgInfo, ProtectiveAction, Resolution};

pub fn print_info(db: &ErgDatabase, info: &ErgInfo<'_>, resolution: Option<&Resolution<'_>>) {
    let m = info.material;
    println!("UN{}  {}\n", m.un_number, m.name);

    if let Some(r) = resolution {
        println!("  Matched by:        {} \"{}\"", r.matched_by, r.matched_term);
        if r.is_ambiguous() {
            println!("  Also matched:      {}", r.other_candidates.join(", "));
        }
    }

    println!("  Guide:             {}  {}", m.guide_label(), info.guide.title);
    match info.hazard_class {
        Some(hc) => println!("  Hazard class:      {} ({})", m.hazard_class, hc.name),
        None => println!("  Hazard class:      {}", m.hazard_class),
    }
    if let Some(pg) = m.packing_group {
        println!("  Packing group:     {pg}");
    }
    println!("  TIH:               {}", yes_no(m.is_tih));
    if m.is_water_reactive == Some(true) {
        println!("  Water reactive:    yes");
    }
    if m.polymerization_hazard {
        println!("  Polymerization:    may polymerize violently");
    }
    if !m.alternate_names.is_empty() {
        println!("  Also known as:     {}", m.alternate_names.join(", "));
    }

    let safety = &info.guide.public_safety;
    println!(
        "  Initial isolation: {} m ({} ft)",
        safety.isolation.meters, safety.isolation.feet
    );
    println!(
        "  Fire isolation:    {} m ({} ft)",
        safety.fire_isolation.meters, safety.fire_isolation.feet
    );

    match info.protective_distance {
        Some(pd) => {
            println!("\n  Protective action distances (TIH):");
            print_distance_rows(pd);
        }
        None if m.is_tih => {
            println!("\n  TIH material without a distance table entry; use guide isolation.")
        }
        None => {}
    }

    let contacts = db.contacts(None);
    if let Some(primary) = contacts.iter().find(|c| c.is_primary) {
        println!("\n  Emergency: {} {}", primary.name, primary.phone);
    }
    println!();
}

pub fn print_materials(materials: &[&ErgMaterial]) {
    if materials.is_empty() {
        println!("No matching materials.");
        return;
    }
    let max_name = materials.iter().map(|m| m.name.len()).max().unwrap_or(10);
    println!(
        "  {:<6}  {:<width$}  {:<6}  {:<6}  TIH",
        "UN",
        "Name",
        "Guide",
        "Class",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 30));
    for m in materials {
        println!(
            "  {:<6}  {:<width$}  {:<6}  {:<6}  {}",
            m.un_number,
            m.name,
            m.guide_label(),
            m.hazard_class,
            if m.is_tih { "yes" } else { "" },
            width = max_name
        );
    }
}

pub fn print_guide_list(guides: &[GuideSummary]) {
    for g in guides {
        println!("  {:<4} {:<6} {}", g.number, format!("{}m", g.isolation_meters), g.title);
    }
}

pub fn print_action(action: &ProtectiveAction) {
    println!("UN{}  {}\n", action.un_number, action.material_name);
    println!("  {} spill, {}", capitalize(&action.spill_size.to_string()), action.time_of_day);
    println!(
        "  Isolate:           {} m ({} ft) in all directions",
        action.isolation.meters, action.isolation.feet
    );
    println!(
        "  Protect downwind:  {} km ({} mi)",
        action.protect_km, action.protect_miles
    );
    println!("\n  {}\n", action.action);
}

pub fn print_distance_table(distances: &[ProtectiveDistance]) {
    for pd in distances {
        println!("UN{}  {}", pd.un_number, pd.name);
        print_distance_rows(pd);
        println!();
    }
}

fn print_distance_rows(pd: &ProtectiveDistance) {
    println!(
        "    Small spill   day: {}   night: {}",
        reading(&pd.small_spill.day),
        reading(&pd.small_spill.night)
    );
    println!(
        "    Large spill   day: {}   night: {}",
        reading(&pd.large_spill.day),
        reading(&pd.large_spill.night)
    );
}

fn reading(r: &DistanceReading) -> String {
    format!("isolate {} m, protect {} km", r.isolate_meters, r.protect_km)
}

pub fn print_quick(card: &QuickReference) {
    println!("UN{}  {}\n", card.un_number, card.name);
    println!("  Guide:             {}  {}", card.guide_label, card.guide_title);
    println!("  Hazard class:      {}", card.hazard_class);
    println!("  TIH:               {}", yes_no(card.is_tih));
    println!(
        "  Initial isolation: {} m ({} ft)",
        card.isolation.meters, card.isolation.feet
    );
    println!(
        "  Fire isolation:    {} m ({} ft)",
        card.fire_isolation.meters, card.fire_isolation.feet
    );
    if let Some(ref action) = card.protective_action {
        println!(
            "  Protect downwind:  {} km ({} mi), {} spill at {}",
            action.protect_km, action.protect_miles, action.spill_size, action.time_of_day
        );
    }
    println!("  CHEMTREC:          {}\n", card.call_chemtrec);
}

pub fn print_unidentified(cargo: &UnidentifiedCargo) {
    println!("UNKNOWN MATERIAL '{}'\n", cargo.queried);
    println!("  Guide:             {}  {}", cargo.guide, cargo.guide_title);
    println!(
        "  Initial isolation: {} m ({} ft)",
        cargo.isolation.meters, cargo.isolation.feet
    );
    println!("  Fire isolation:    {} m", cargo.fire_isolation_meters);
    println!("\n  Immediate actions:");
    for action in &cargo.immediate_actions {
        println!("    - {action}");
    }
    println!();
}

pub fn print_contacts(contacts: &[&EmergencyContact]) {
    if contacts.is_empty() {
        println!("No emergency contacts for that country.");
        return;
    }
    for c in contacts {
        let primary = if c.is_primary { " *" } else { "" };
        let hours = if c.is_24_hour { "24h" } else { "" };
        println!(
            "  {:<8} {:<24} {:<18} {}{}",
            c.country, c.name, c.phone, hours, primary
        );
        if let Some(ref desc) = c.description {
            println!("           {desc}");
        }
    }
}

pub fn print_classes(classes: &[HazardClass]) {
    for hc in classes {
        println!("Class {}  {}", hc.class, hc.name);
        for d in &hc.divisions {
            println!("  {:<6} {}", d.code, d.description);
        }
        println!();
    }
}

pub fn print_stats(stats: &DatabaseStats) {
    println!("Dataset {}\n", stats.version);
    println!("  Materials:             {}", stats.materials);
    println!("  Guides:                {}", stats.guides);
    println!("  TIH materials:         {}", stats.tih_materials);
    println!("  Protective distances:  {}", stats.protective_distances);
    println!("  Emergency contacts:    {}", stats.emergency_contacts);
    println!("  Product aliases:       {}", stats.product_aliases);
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
