//! Flat one-row-per-document representation of an education record.

use serde::ser::{Serialize, SerializeMap, Serializer};
use vitae_domain::{DegreeLevel, EducationRecord};

/// Column names, in output order.
pub const COLUMNS: [&str; 23] = [
    "person_name",
    "cv_filename",
    "undergrad_1_degree",
    "undergrad_1_major",
    "undergrad_1_school",
    "undergrad_1_year",
    "undergrad_2_degree",
    "undergrad_2_major",
    "undergrad_2_school",
    "undergrad_2_year",
    "masters_1_degree",
    "masters_1_major",
    "masters_1_school",
    "masters_1_year",
    "masters_2_degree",
    "masters_2_major",
    "masters_2_school",
    "masters_2_year",
    "phd_degree",
    "phd_major",
    "phd_school",
    "phd_year",
    "notes",
];

/// Degree slots per level, in column order.
const SLOTS: [(DegreeLevel, usize); 3] = [
    (DegreeLevel::Undergrad, 2),
    (DegreeLevel::Masters, 2),
    (DegreeLevel::Phd, 1),
];

/// One document as a fixed-width row of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    values: Vec<String>,
}

impl TabularRow {
    /// Flatten a record into a row.
    ///
    /// Degrees that do not fit the level's slots are summarised in the notes.
    pub fn from_record(record: &EducationRecord) -> Self {
        let mut values = Vec::with_capacity(COLUMNS.len());
        values.push(record.name.clone());
        values.push(record.source_label.clone());

        let mut notes = record.notes.clone();

        for (level, slots) in SLOTS {
            let degrees: Vec<_> = record.degrees_by_level(level).collect();
            for slot in 0..slots {
                match degrees.get(slot) {
                    Some(degree) => values.extend([
                        degree.label.clone(),
                        degree.field.clone(),
                        degree.institution.clone(),
                        degree.year_string(),
                    ]),
                    None => values.extend(std::iter::repeat_n(String::new(), 4)),
                }
            }
            if degrees.len() > slots {
                notes.push(format!(
                    "{} {} degrees found, only first {} shown",
                    degrees.len(),
                    level.display_name(),
                    slots
                ));
            }
        }

        values.push(notes.join("; "));
        Self { values }
    }

    /// Value of a named column.
    pub fn get(&self, column: &str) -> Option<&str> {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// All values, in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Serialize for TabularRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLUMNS.len()))?;
        for (column, value) in COLUMNS.iter().zip(&self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
