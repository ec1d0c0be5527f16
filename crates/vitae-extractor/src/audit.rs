//! Post-extraction review of a finished record

use std::collections::BTreeMap;
use vitae_domain::{DegreeLevel, EducationRecord};

/// Anomalies in a record that deserve a human look
///
/// Currently flags one institution attached to degrees at more than one
/// level, which usually means the backward institution walk reached past the
/// degree it belonged to.
pub fn review_record(record: &EducationRecord) -> Vec<String> {
    let mut levels_by_institution: BTreeMap<String, (String, Vec<DegreeLevel>)> = BTreeMap::new();

    for degree in &record.degrees {
        let entry = levels_by_institution
            .entry(degree.institution.to_lowercase())
            .or_insert_with(|| (degree.institution.clone(), Vec::new()));
        if !entry.1.contains(&degree.level) {
            entry.1.push(degree.level);
        }
    }

    levels_by_institution
        .into_values()
        .filter(|(_, levels)| levels.len() > 1)
        .map(|(institution, levels)| {
            let names: Vec<&str> = levels.iter().map(|l| l.display_name()).collect();
            format!("same institution at multiple levels: {} ({})", institution, names.join(", "))
        })
        .collect()
}
