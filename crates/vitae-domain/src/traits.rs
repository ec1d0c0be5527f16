//! Trait definitions for the parsing boundary
//!
//! The batch driver depends on this trait rather than on a concrete engine.

use crate::EducationRecord;

/// Trait for turning document text into an education record
///
/// Implemented by the application layer (vitae-extractor). Parsing is total:
/// every input, including an empty one, yields a record whose notes describe
/// whatever could not be recovered.
pub trait RecordParser {
    /// Parse one document's text; `label` is echoed into the record
    fn parse(&self, text: &str, label: &str) -> EducationRecord;
}
