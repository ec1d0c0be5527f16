//! Education record module - the per-document result

use crate::{Degree, DegreeLevel};

/// All education data extracted from one document
///
/// `degrees` is ordered doctoral, then master's, then undergraduate, each
/// group by ascending year. `notes` carries diagnostics such as
/// "no degree mentions found"; uncertainty is reported here rather than
/// through errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationRecord {
    /// Person name, empty when none could be extracted
    pub name: String,

    /// Opaque document label used for traceability
    pub source_label: String,

    /// Selected degrees
    pub degrees: Vec<Degree>,

    /// Diagnostic notes
    pub notes: Vec<String>,
}

impl EducationRecord {
    /// Create an empty record for a document label
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            ..Self::default()
        }
    }

    /// Degrees at the given level, in record order
    pub fn degrees_by_level(&self, level: DegreeLevel) -> impl Iterator<Item = &Degree> {
        self.degrees.iter().filter(move |d| d.level == level)
    }

    /// Number of degrees at the given level
    pub fn count_level(&self, level: DegreeLevel) -> usize {
        self.degrees_by_level(level).count()
    }

    /// Whether any degree exists at the given level
    pub fn has_level(&self, level: DegreeLevel) -> bool {
        self.degrees_by_level(level).next().is_some()
    }

    /// Format all degrees at a level as one `" | "`-separated string
    pub fn format_degrees(&self, level: DegreeLevel) -> String {
        self.degrees_by_level(level)
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Append a diagnostic note
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EducationRecord {
        let mut record = EducationRecord::new("jdoe.txt");
        record.degrees = vec![
            Degree::new("Ph.D.", DegreeLevel::Phd, "Finance", "Stanford University", Some(2009), 10),
            Degree::new("B.A.", DegreeLevel::Undergrad, "Economics", "Yale University", Some(2001), 14),
            Degree::new("B.S.", DegreeLevel::Undergrad, "", "Yale University", Some(2002), 15),
        ];
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = EducationRecord::new("cv.txt");
        assert_eq!(record.source_label, "cv.txt");
        assert!(record.name.is_empty());
        assert!(record.degrees.is_empty());
        assert!(record.notes.is_empty());
    }

    #[test]
    fn test_degrees_by_level() {
        let record = sample();
        assert_eq!(record.count_level(DegreeLevel::Undergrad), 2);
        assert_eq!(record.count_level(DegreeLevel::Masters), 0);
        assert!(record.has_level(DegreeLevel::Phd));
        assert!(!record.has_level(DegreeLevel::Masters));
    }

    #[test]
    fn test_format_degrees() {
        let record = sample();
        assert_eq!(
            record.format_degrees(DegreeLevel::Undergrad),
            "B.A., Economics, Yale University (2001) | B.S., Yale University (2002)"
        );
        assert_eq!(record.format_degrees(DegreeLevel::Masters), "");
    }
}
