//! Record assembly: drop, deduplicate, select and order candidate degrees

use crate::config::ExtractorConfig;
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;
use vitae_domain::{Degree, DegreeLevel};

/// Selected degrees plus the notes explaining what was left out
#[derive(Debug, Default)]
pub(crate) struct Assembly {
    pub degrees: Vec<Degree>,
    pub notes: Vec<String>,
}

type DedupKey = (String, DegreeLevel, String, String, Option<u16>);

fn dedup_key(degree: &Degree) -> DedupKey {
    (
        degree.label.clone(),
        degree.level,
        degree.field.to_lowercase(),
        degree.institution.to_lowercase(),
        degree.year,
    )
}

/// Turn per-mention candidates into the final degree list
///
/// Candidates without an institution are dropped. Identical candidates
/// collapse to the first one seen. Each level is then capped: doctoral
/// entries by completeness (earliest year, then earliest line, breaks ties),
/// the others by ascending year. The output runs doctoral, master's,
/// undergraduate, each by ascending year with undated entries last.
pub(crate) fn assemble(candidates: Vec<Degree>, config: &ExtractorConfig) -> Assembly {
    let mut assembly = Assembly::default();

    let (retained, dropped): (Vec<Degree>, Vec<Degree>) = candidates
        .into_iter()
        .partition(|d| !d.label.is_empty() && !d.institution.is_empty());
    for degree in &dropped {
        debug!("Dropping {} on line {}: no institution found", degree.label, degree.line_index);
    }
    if !dropped.is_empty() {
        assembly.notes.push(format!(
            "{} degree mention(s) dropped: no institution found",
            dropped.len()
        ));
    }

    let mut seen = HashSet::new();
    let unique: Vec<Degree> = retained
        .into_iter()
        .filter(|d| seen.insert(dedup_key(d)))
        .collect();

    for level in DegreeLevel::ALL {
        let mut group: Vec<Degree> = unique.iter().filter(|d| d.level == level).cloned().collect();
        let cap = config.cap_for(level);

        if level == DegreeLevel::Phd {
            group.sort_by_key(|d| (Reverse(d.completeness()), d.year_sort_key(), d.line_index));
        } else {
            group.sort_by_key(Degree::year_sort_key);
        }

        if group.len() > cap {
            assembly.notes.push(format!(
                "{} {} degrees found, only first {} kept",
                group.len(),
                level.display_name(),
                cap
            ));
            group.truncate(cap);
        }

        group.sort_by_key(Degree::year_sort_key);
        assembly.degrees.extend(group);
    }

    if !assembly.degrees.is_empty() && !assembly.degrees.iter().any(|d| d.level == DegreeLevel::Phd) {
        assembly.notes.push("no PhD found".to_string());
    }

    assembly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degree(label: &str, level: DegreeLevel, institution: &str, year: Option<u16>, line: usize) -> Degree {
        Degree::new(label, level, "", institution, year, line)
    }

    #[test]
    fn test_drops_degrees_without_institution() {
        let assembly = assemble(
            vec![
                degree("Ph.D.", DegreeLevel::Phd, "", Some(2009), 1),
                degree("B.A.", DegreeLevel::Undergrad, "Yale University", Some(2001), 2),
            ],
            &ExtractorConfig::default(),
        );
        assert_eq!(assembly.degrees.len(), 1);
        assert!(assembly.notes.contains(&"1 degree mention(s) dropped: no institution found".to_string()));
        assert!(assembly.notes.contains(&"no PhD found".to_string()));
    }

    #[test]
    fn test_identical_candidates_collapse() {
        let assembly = assemble(
            vec![
                degree("MBA", DegreeLevel::Masters, "INSEAD", Some(2004), 3),
                degree("MBA", DegreeLevel::Masters, "insead", Some(2004), 30),
            ],
            &ExtractorConfig::default(),
        );
        assert_eq!(assembly.degrees.len(), 1);
        assert_eq!(assembly.degrees[0].line_index, 3);
    }

    #[test]
    fn test_phd_prefers_completeness_over_earliness() {
        let assembly = assemble(
            vec![
                degree("Ph.D.", DegreeLevel::Phd, "Stanford University", None, 2),
                degree("Ph.D.", DegreeLevel::Phd, "Stanford University", Some(2009), 40),
            ],
            &ExtractorConfig::default(),
        );
        assert_eq!(assembly.degrees.len(), 1);
        assert_eq!(assembly.degrees[0].year, Some(2009));
        assert!(assembly.notes.contains(&"2 PhD degrees found, only first 1 kept".to_string()));
    }

    #[test]
    fn test_phd_tie_broken_by_earliest_year() {
        let assembly = assemble(
            vec![
                degree("Ph.D.", DegreeLevel::Phd, "MIT", Some(2012), 1),
                degree("D.Phil.", DegreeLevel::Phd, "University of Oxford", Some(2008), 5),
            ],
            &ExtractorConfig::default(),
        );
        assert_eq!(assembly.degrees[0].label, "D.Phil.");
    }

    #[test]
    fn test_caps_and_ordering() {
        let assembly = assemble(
            vec![
                degree("B.S.", DegreeLevel::Undergrad, "MIT", None, 9),
                degree("M.S.", DegreeLevel::Masters, "MIT", Some(2006), 4),
                degree("B.A.", DegreeLevel::Undergrad, "Yale University", Some(2003), 8),
                degree("B.Sc.", DegreeLevel::Undergrad, "UCL", Some(1999), 10),
                degree("Ph.D.", DegreeLevel::Phd, "MIT", Some(2010), 1),
            ],
            &ExtractorConfig::default(),
        );
        let labels: Vec<&str> = assembly.degrees.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Ph.D.", "M.S.", "B.Sc.", "B.A."]);
        assert_eq!(assembly.notes, vec!["3 undergrad degrees found, only first 2 kept".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let assembly = assemble(Vec::new(), &ExtractorConfig::default());
        assert!(assembly.degrees.is_empty());
        assert!(assembly.notes.is_empty());
    }
}
