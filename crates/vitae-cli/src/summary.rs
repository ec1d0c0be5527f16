//! Aggregate statistics over a batch.

use crate::batch::DocumentResult;
use std::fmt;
use vitae_domain::DegreeLevel;

const MAX_LISTED_EMPTY: usize = 20;
const MAX_LISTED_FAILURES: usize = 10;

/// Counts collected over one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents processed, failures included
    pub documents: usize,
    /// Documents with a person name
    pub names: usize,
    /// Documents with at least one doctoral degree
    pub phd: usize,
    /// Documents with at least one master's degree
    pub masters: usize,
    /// Documents with at least one undergraduate degree
    pub undergrad: usize,
    /// Documents with at least one degree of any level
    pub with_degree: usize,
    /// Labels of readable documents where no degree was found
    pub without_degree: Vec<String>,
    /// Documents holding more than one degree at some level
    pub multiple_at_level: usize,
    /// Labels of documents that could not be read
    pub failures: Vec<String>,
}

impl BatchSummary {
    /// Summarise a batch.
    pub fn from_results(results: &[DocumentResult]) -> Self {
        let mut summary = Self {
            documents: results.len(),
            ..Self::default()
        };

        for result in results {
            let record = &result.record;
            if result.failed {
                summary.failures.push(record.source_label.clone());
                continue;
            }

            if !record.name.is_empty() {
                summary.names += 1;
            }
            if record.has_level(DegreeLevel::Phd) {
                summary.phd += 1;
            }
            if record.has_level(DegreeLevel::Masters) {
                summary.masters += 1;
            }
            if record.has_level(DegreeLevel::Undergrad) {
                summary.undergrad += 1;
            }
            if record.degrees.is_empty() {
                summary.without_degree.push(record.source_label.clone());
            } else {
                summary.with_degree += 1;
            }
            if DegreeLevel::ALL.iter().any(|level| record.count_level(*level) > 1) {
                summary.multiple_at_level += 1;
            }
        }

        summary
    }

    /// "n/total (pct%)" for one count
    fn ratio(&self, count: usize) -> String {
        if self.documents == 0 {
            return format!("{}/0", count);
        }
        format!(
            "{}/{} ({:.1}%)",
            count,
            self.documents,
            100.0 * count as f64 / self.documents as f64
        )
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, labels: &[String], limit: usize) -> fmt::Result {
    for label in labels.iter().take(limit) {
        writeln!(f, "    - {}", label)?;
    }
    if labels.len() > limit {
        writeln!(f, "    ... and {} more", labels.len() - limit)?;
    }
    Ok(())
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Documents processed:       {}", self.documents)?;
        writeln!(f, "Names extracted:           {}", self.ratio(self.names))?;
        writeln!(f, "PhD found:                 {}", self.ratio(self.phd))?;
        writeln!(f, "Master's found:            {}", self.ratio(self.masters))?;
        writeln!(f, "Undergrad found:           {}", self.ratio(self.undergrad))?;
        writeln!(f, "At least one degree:       {}", self.ratio(self.with_degree))?;
        writeln!(f, "No degree found:           {}", self.ratio(self.without_degree.len()))?;
        write_list(f, &self.without_degree, MAX_LISTED_EMPTY)?;
        writeln!(f, "Multiple at one level:     {}", self.ratio(self.multiple_at_level))?;
        write!(f, "Failures:                  {}", self.ratio(self.failures.len()))?;
        if !self.failures.is_empty() {
            writeln!(f)?;
            write_list(f, &self.failures, MAX_LISTED_FAILURES)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::{Degree, EducationRecord};

    fn result(label: &str, name: &str, degrees: Vec<Degree>, failed: bool) -> DocumentResult {
        let mut record = EducationRecord::new(label);
        record.name = name.to_string();
        record.degrees = degrees;
        DocumentResult { record, failed }
    }

    #[test]
    fn test_counts() {
        let results = vec![
            result(
                "a.txt",
                "Jane Doe",
                vec![
                    Degree::new("Ph.D.", DegreeLevel::Phd, "", "MIT", Some(2010), 1),
                    Degree::new("B.A.", DegreeLevel::Undergrad, "", "Yale University", Some(2001), 2),
                    Degree::new("B.S.", DegreeLevel::Undergrad, "", "Yale University", Some(2002), 3),
                ],
                false,
            ),
            result("b.txt", "", Vec::new(), false),
            result(
                "c.txt",
                "John Roe",
                vec![Degree::new("MBA", DegreeLevel::Masters, "", "INSEAD", None, 4)],
                false,
            ),
            result("d.txt", "", Vec::new(), true),
        ];

        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.documents, 4);
        assert_eq!(summary.names, 2);
        assert_eq!((summary.phd, summary.masters, summary.undergrad), (1, 1, 1));
        assert_eq!(summary.with_degree, 2);
        assert_eq!(summary.without_degree, vec!["b.txt".to_string()]);
        assert_eq!(summary.multiple_at_level, 1);
        assert_eq!(summary.failures, vec!["d.txt".to_string()]);
    }

    #[test]
    fn test_display_shows_shares() {
        let results = vec![
            result(
                "a.txt",
                "Jane Doe",
                vec![Degree::new("Ph.D.", DegreeLevel::Phd, "", "MIT", Some(2010), 1)],
                false,
            ),
            result("b.txt", "", Vec::new(), false),
            result("c.txt", "", Vec::new(), false),
        ];

        let text = BatchSummary::from_results(&results).to_string();
        assert!(text.contains("Documents processed:       3\n"));
        assert!(text.contains("Names extracted:           1/3 (33.3%)"));
        assert!(text.contains("PhD found:                 1/3 (33.3%)"));
        assert!(text.contains("No degree found:           2/3 (66.7%)"));
        assert!(text.contains("Failures:                  0/3 (0.0%)"));
    }

    #[test]
    fn test_display_empty_batch() {
        let text = BatchSummary::default().to_string();
        assert!(text.contains("Names extracted:           0/0"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_display_truncates_lists() {
        let results: Vec<DocumentResult> = (0..25)
            .map(|i| result(&format!("{:02}.txt", i), "", Vec::new(), false))
            .collect();

        let text = BatchSummary::from_results(&results).to_string();
        assert!(text.contains("No degree found:           25/25 (100.0%)"));
        assert!(text.contains("    - 19.txt"));
        assert!(!text.contains("    - 20.txt"));
        assert!(text.contains("... and 5 more"));
    }
}
