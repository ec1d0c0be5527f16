//! Vitae Extractor
//!
//! Degree-anchored extraction of education records from CV text.
//!
//! # Overview
//!
//! The extractor scans a whole document for credential tokens ("Ph.D.",
//! "M.B.A.", "Bachelor of Arts", ...), vetoes lines whose context is about a
//! job, a citation, a course or a committee, and then harvests institution,
//! graduation year and field of study from a tight window around each
//! surviving mention. Every field it emits is traceable to text near the
//! mention; nothing is inferred.
//!
//! # Architecture
//!
//! ```text
//! Text → normalize → scanner (exclusion + patterns) → mentions
//!      → institution / year / field → assembler → EducationRecord
//!      → name (independently)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use vitae_extractor::{Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
//! let text = "Jane Doe\nEDUCATION\nPh.D., Finance, Stanford University, 2009\nB.A., Economics, Yale University, 2003";
//!
//! let record = extractor.parse(text, "jdoe.txt");
//!
//! assert_eq!(record.name, "Jane Doe");
//! assert_eq!(record.degrees.len(), 2);
//! assert_eq!(record.degrees[0].institution, "Stanford University");
//! assert_eq!(record.degrees[1].year, Some(2003));
//! ```

#![warn(missing_docs)]

mod assembler;
mod audit;
mod config;
mod context;
mod error;
mod exclusion;
mod extractor;
mod field;
mod institution;
mod name;
mod normalize;
mod patterns;
mod scanner;
mod year;


pub use audit::review_record;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use exclusion::{exclusion_category, is_excluded, is_section_boundary, ExclusionCategory};
pub use extractor::{parse_education, Extractor};
pub use field::{field_after_token, is_valid_field};
pub use institution::{extract_institution, is_valid_institution, KNOWN_INSTITUTIONS};
pub use year::extract_year;
