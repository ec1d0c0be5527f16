//! Degree module - a single credential attributed to a person

use crate::DegreeLevel;
use std::fmt;

/// A degree recovered from document text
///
/// Every field is traceable to explicit text near the credential mention.
/// Degrees are immutable once the extractor hands them out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Degree {
    /// Canonical degree label (e.g. "Ph.D.", "MBA", "B.S.")
    pub label: String,

    /// Credential level
    pub level: DegreeLevel,

    /// Field of study, empty when none was recoverable
    pub field: String,

    /// Institution name, never empty in a finished record
    pub institution: String,

    /// Graduation year
    pub year: Option<u16>,

    /// 0-based line index of the originating mention
    pub line_index: usize,
}

impl Degree {
    /// Create a new degree
    pub fn new(
        label: impl Into<String>,
        level: DegreeLevel,
        field: impl Into<String>,
        institution: impl Into<String>,
        year: Option<u16>,
        line_index: usize,
    ) -> Self {
        Self {
            label: label.into(),
            level,
            field: field.into(),
            institution: institution.into(),
            year,
            line_index,
        }
    }

    /// Year as a 4-digit string, or an empty string
    pub fn year_string(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Completeness score: +1 for an institution, +1 for a year
    pub fn completeness(&self) -> u8 {
        u8::from(!self.institution.is_empty()) + u8::from(self.year.is_some())
    }

    /// Sort key ordering by ascending year, undated degrees last
    pub fn year_sort_key(&self) -> (bool, u16) {
        match self.year {
            Some(y) => (false, y),
            None => (true, 0),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.field.is_empty() {
            write!(f, ", {}", self.field)?;
        }
        if !self.institution.is_empty() {
            write!(f, ", {}", self.institution)?;
        }
        if let Some(year) = self.year {
            write!(f, " ({})", year)?;
        }
        Ok(())
    }
}
