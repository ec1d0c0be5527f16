//! Core Extractor implementation

use crate::assembler::assemble;
use crate::config::ExtractorConfig;
use crate::context::MentionContext;
use crate::error::ExtractorError;
use crate::field::find_field;
use crate::institution::find_institution;
use crate::name::extract_name;
use crate::normalize::{document_lines, DocumentLine};
use crate::scanner::scan;
use crate::year::find_year;
use tracing::{debug, info};
use vitae_domain::traits::RecordParser;
use vitae_domain::{Degree, DegreeMention, EducationRecord};

/// The Extractor turns CV text into an education record
///
/// Extraction is degree-anchored: credential tokens are located first, then
/// institution, year and field are harvested from a bounded window around
/// each one. The extractor holds nothing but its configuration, so one
/// instance can serve any number of documents, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, rejecting invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract an education record from one document's text
    ///
    /// Never fails: anything that could not be recovered is described in the
    /// record's notes.
    pub fn parse(&self, text: &str, label: &str) -> EducationRecord {
        let mut record = EducationRecord::new(label);

        if text.trim().is_empty() {
            record.add_note("no text provided");
            info!("Document '{}' is empty", label);
            return record;
        }

        let lines = document_lines(text, self.config.split_collapsed_words);

        match extract_name(&lines, self.config.name_scan_lines) {
            Some(name) => record.name = name,
            None => record.add_note("could not extract name"),
        }

        let mentions = scan(&lines, self.config.multi_token_lines);
        if mentions.is_empty() {
            record.add_note("no degree mentions found");
            info!("Document '{}': {} lines, no degree mentions", label, lines.len());
            return record;
        }

        let candidates = self.harvest(&lines, &mentions);
        let assembly = assemble(candidates, &self.config);
        record.degrees = assembly.degrees;
        record.notes.extend(assembly.notes);

        info!(
            "Document '{}': {} lines, {} mentions, {} degrees kept",
            label,
            lines.len(),
            mentions.len(),
            record.degrees.len()
        );

        record
    }

    /// Build one candidate degree per mention
    fn harvest(&self, lines: &[DocumentLine], mentions: &[DegreeMention]) -> Vec<Degree> {
        let mut candidates = Vec::with_capacity(mentions.len());
        let mut prev_cut = 0;

        for (i, mention) in mentions.iter().enumerate() {
            let Ok(position) = lines.binary_search_by_key(&mention.line_index, |l| l.index) else {
                continue;
            };

            let first_on_line = i == 0 || mentions[i - 1].line_index != mention.line_index;
            if first_on_line {
                prev_cut = 0;
            }
            let next_start = mentions
                .get(i + 1)
                .filter(|next| next.line_index == mention.line_index)
                .map(|next| next.start);

            let ctx = MentionContext::new(mention, prev_cut, next_start, lines, position);
            prev_cut = ctx.segment_end();

            let institution = find_institution(&ctx, self.config.institution_lookback).unwrap_or_default();
            let year = find_year(&ctx, &self.config);
            let field = find_field(&ctx, &self.config).unwrap_or_default();

            debug!(
                "Line {}: {} '{}' institution='{}' field='{}' year={:?}",
                mention.line_index, mention.level, mention.token, institution, field, year
            );

            candidates.push(Degree::new(
                mention.label.clone(),
                mention.level,
                field,
                institution,
                year,
                mention.line_index,
            ));
        }

        candidates
    }
}

impl RecordParser for Extractor {
    fn parse(&self, text: &str, label: &str) -> EducationRecord {
        Extractor::parse(self, text, label)
    }
}

/// Parse one document with the default configuration
pub fn parse_education(text: &str, label: &str) -> EducationRecord {
    Extractor::default().parse(text, label)
}
