//! Degree level module - the three credential tiers

use std::fmt;

/// Level of an academic credential
///
/// Exactly three levels exist. Their declaration order is the order degrees
/// are listed in a finished record:
/// - Phd: doctoral degrees (Ph.D., D.Phil., D.B.A., Ed.D.)
/// - Masters: master's and professional degrees (MBA, M.S., J.D., ...)
/// - Undergrad: bachelor's degrees (B.A., B.S., A.B., ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DegreeLevel {
    /// Doctoral degrees
    Phd,

    /// Master's degrees
    Masters,

    /// Bachelor's degrees
    Undergrad,
}

impl DegreeLevel {
    /// All levels, in record order
    pub const ALL: [DegreeLevel; 3] = [DegreeLevel::Phd, DegreeLevel::Masters, DegreeLevel::Undergrad];

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeLevel::Phd => "phd",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Undergrad => "undergrad",
        }
    }

    /// Human-readable label used in notes
    pub fn display_name(&self) -> &'static str {
        match self {
            DegreeLevel::Phd => "PhD",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Undergrad => "undergrad",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_is_record_order() {
        assert!(DegreeLevel::Phd < DegreeLevel::Masters);
        assert!(DegreeLevel::Masters < DegreeLevel::Undergrad);
    }

    #[test]
    fn test_names() {
        let names: Vec<String> = DegreeLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["phd", "masters", "undergrad"]);
        assert_eq!(DegreeLevel::Phd.display_name(), "PhD");
    }
}
