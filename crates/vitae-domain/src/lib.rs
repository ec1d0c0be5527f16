//! Vitae Domain Layer
//!
//! This crate contains the domain model for Vitae, the degree-anchored
//! education extractor. It has no runtime dependencies and defines the value
//! objects and trait interfaces that the extraction engine and the batch
//! driver both depend upon.
//!
//! ## Key Concepts
//!
//! - **Degree Mention**: A raw lexical match of a degree token on one line
//! - **Degree**: A credential with level, field, institution and year
//! - **Education Record**: Everything extracted from one document
//! - **Degree Level**: Doctoral, master's or undergraduate
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and ordering rules only
//! - Pattern matching lives in `vitae-extractor`
//! - Trait definitions for the parsing boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod degree;
pub mod level;
pub mod mention;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use degree::Degree;
pub use level::DegreeLevel;
pub use mention::DegreeMention;
pub use record::EducationRecord;
pub use traits::RecordParser;
