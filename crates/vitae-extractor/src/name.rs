//! Person name extraction from the document header

use crate::exclusion::{is_section_boundary, HEADER_TOKEN, ROLE_TOKEN};
use crate::institution::has_institution_keyword;
use crate::normalize::DocumentLine;
use crate::patterns::contains_degree_token;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum share of letters, spaces and name punctuation in an accepted line
const NAME_DENSITY: f64 = 0.85;

static CREDENTIAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i),\s*(?:Ph\.?\s?D|M\.?B\.?A|M\.?D|J\.?D|Ed\.?D|D\.?B\.?A|CPA|CFA|M\.?Sc|M\.?S|M\.?A)\b.*$",
    )
    .expect("Invalid name regex pattern")
});

static BARE_CREDENTIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:Ph\.?\s?D\.?|MBA)$").expect("Invalid name regex pattern"));

static REVISED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\s,;(\-–—]*(?:last\s+)?(?:revised|updated)\b.*$").expect("Invalid name regex pattern")
});

static PHONE_OR_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{3}[-.\s)]*\d{3}|\b\d{5}(?:-\d{4})?\b").expect("Invalid name regex pattern")
});

static CONTACT_OR_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)@|https?:|www\.|\b(?:street|avenue|ave|road|boulevard|blvd|suite|apt|drive|floor|building|room|p\.?\s?o\.?\s+box|department|dept|phone|tel|fax|mobile|e-?mail|address|citizenship|homepage|website)\b",
    )
    .expect("Invalid name regex pattern")
});

static CV_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:CV|C\.V\.)").expect("Invalid name regex pattern")
});

/// Strip credential suffixes and revision stamps from a header line
fn strip_decorations(line: &str) -> String {
    let line = REVISED_SUFFIX.replace(line, "");
    let line = CREDENTIAL_SUFFIX.replace(&line, "");
    let line = BARE_CREDENTIAL.replace(&line, "");
    line.trim().trim_end_matches(',').trim().to_string()
}

fn is_rejected(line: &str) -> bool {
    PHONE_OR_ZIP.is_match(line)
        || CONTACT_OR_ADDRESS.is_match(line)
        || CV_WORD.is_match(line)
        || HEADER_TOKEN.is_match(line)
        || ROLE_TOKEN.is_match(line)
        || is_section_boundary(line)
        || has_institution_keyword(line)
        || contains_degree_token(line)
}

fn looks_like_name(candidate: &str) -> bool {
    let tokens = candidate.split_whitespace().count();
    if !(2..=5).contains(&tokens) {
        return false;
    }
    let total = candidate.chars().count();
    let name_chars = candidate
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '.' | '-' | ',' | '\'' | '’'))
        .count();
    name_chars as f64 / total as f64 >= NAME_DENSITY
}

/// First header line that reads as a person's name
///
/// Only the first `scan_lines` lines of the original text are considered,
/// blank ones included. Nothing is returned rather than a doubtful guess.
pub(crate) fn extract_name(lines: &[DocumentLine], scan_lines: usize) -> Option<String> {
    lines
        .iter()
        .take_while(|line| line.index < scan_lines)
        .map(|line| strip_decorations(&line.text))
        .find(|candidate| !is_rejected(candidate) && looks_like_name(candidate))
}
