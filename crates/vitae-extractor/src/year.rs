//! Graduation year extraction

use crate::config::ExtractorConfig;
use crate::context::MentionContext;
use crate::exclusion::{is_excluded, is_section_boundary};
use crate::patterns::contains_degree_token;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("Invalid year regex pattern"));

/// "2008-2012", "2008 – 2012", "Sept. 2008 - June 2012"
static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*[-–—]\s*(?:[A-Za-z]+\.?\s+)?(\d+)").expect("Invalid year regex pattern")
});

/// Markers after which a trailing year is an award year, not a graduation year
static AWARD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)alumn(?:us|a|i|ae)|award|honou?r").expect("Invalid year regex pattern")
});

/// Parse a standalone 4-digit numeral inside the configured range
fn as_year(digits: &str, config: &ExtractorConfig) -> Option<u16> {
    if digits.len() != 4 {
        return None;
    }
    digits.parse::<u16>().ok().filter(|y| config.year_in_range(*y))
}

/// Year stated in a span of text
///
/// Only whole digit runs of exactly four digits count, so "120085" and
/// "02139" never yield a year. A range returns its later end; otherwise the
/// last year wins unless an award or alumni marker is present, in which case
/// the first one does.
pub fn extract_year(text: &str, config: &ExtractorConfig) -> Option<u16> {
    let ranges: Vec<u16> = YEAR_RANGE
        .captures_iter(text)
        .filter_map(|caps| {
            let (from, to) = (caps.get(1)?, caps.get(2)?);
            let whole_start = text[..from.start()].chars().next_back().is_none_or(|c| !c.is_ascii_digit());
            if !whole_start {
                return None;
            }
            let from = as_year(from.as_str(), config)?;
            let to = as_year(to.as_str(), config)?;
            Some(from.max(to))
        })
        .collect();
    if let Some(last) = ranges.last() {
        return Some(*last);
    }

    let years: Vec<u16> = DIGIT_RUN
        .find_iter(text)
        .filter_map(|m| as_year(m.as_str(), config))
        .collect();

    match years.as_slice() {
        [] => None,
        [first, _, ..] if AWARD_MARKER.is_match(text) => Some(*first),
        [.., last] => Some(*last),
    }
}

/// Year for a mention: own segment, lead-in, line, then the tight window
///
/// Neighbour lines that are vetoed or carry a degree of their own are
/// skipped so one degree's year is never lent to another.
pub(crate) fn find_year(ctx: &MentionContext<'_>, config: &ExtractorConfig) -> Option<u16> {
    if let Some(year) = ctx
        .local_texts()
        .into_iter()
        .find_map(|text| extract_year(text, config))
    {
        return Some(year);
    }

    ctx.neighbours(config.year_window)
        .filter(|line| {
            !is_section_boundary(&line.text)
                && !is_excluded(&line.text)
                && !contains_degree_token(&line.text)
        })
        .find_map(|line| extract_year(&line.text, config))
}
