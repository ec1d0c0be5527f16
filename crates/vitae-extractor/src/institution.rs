//! Institution extraction and validation
//!
//! Structural patterns are tried in a fixed order and the first candidate that
//! survives cleaning and validation wins. There is no scoring across
//! alternatives and no fallback guess: a span that fails validation is
//! discarded outright.

use crate::context::MentionContext;
use crate::exclusion::{is_excluded, is_section_boundary, COURSE_TOKEN, HEADER_TOKEN, ROLE_TOKEN};
use crate::patterns::is_degree_token;
use regex::Regex;
use std::sync::LazyLock;

/// Short forms accepted as institutions without a keyword
pub const KNOWN_INSTITUTIONS: &[&str] = &[
    "MIT",
    "Caltech",
    "UCLA",
    "NYU",
    "USC",
    "UC Berkeley",
    "LSE",
    "INSEAD",
    "CMU",
    "UCL",
    "ETH Zurich",
    "EPFL",
    "HEC Paris",
    "IESE",
    "Georgia Tech",
    "Virginia Tech",
    "Sciences Po",
];

/// A capitalised word, including initials and hyphenated names ("A&M", "Urbana-Champaign")
const WORD: &str = r"\p{Lu}[\p{L}.'&\-]*";
const UNIVERSITY: &str =
    r"(?:(?i:University)|Universit[éeàa]|Universität|Universidad|Universidade|Universiteit)";
const CONNECTOR: &str = r"(?i:of|de|di|do|des|van|zu|at|in)";

fn name(max_words: usize) -> String {
    format!(r"{WORD}(?:\s+{WORD}){{0,{}}}", max_words - 1)
}

/// A name that may contain "of", "and", "the" between capitalised words
fn joined_name() -> String {
    format!(r"{WORD}(?:\s+(?:(?i:of|and|the|&)\s+)*{WORD}){{0,5}}")
}

fn structural(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid institution regex pattern")
}

static INSTITUTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let allow = KNOWN_INSTITUTIONS
        .iter()
        .map(|s| regex::escape(s).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    let n = name(4);
    let joined = joined_name();

    vec![
        // Allow-listed short forms
        structural(&format!(r"\b(?:{allow})\b")),
        // University of X (at Y)
        structural(&format!(
            r"(?:The\s+)?{UNIVERSITY}\s+{CONNECTOR}\s+(?:(?i:the)\s+)?{n}(?:\s+(?i:at|in)\s+{n})?"
        )),
        // X University, X State University (in Y)
        structural(&format!(r"{n}\s+{UNIVERSITY}(?:\s+{CONNECTOR}\s+{n})?")),
        // X Institute of Technology, Institute of X
        structural(&format!(r"{n}\s+(?i:Institute)\s+(?i:of|for)\s+{n}")),
        structural(&format!(r"(?:The\s+)?(?i:Institute)\s+(?i:of|for)\s+{n}")),
        // X College, College of X
        structural(&format!(r"{n}\s+(?i:College)(?:\s+(?i:of)\s+{joined})?")),
        structural(&format!(r"(?:The\s+)?(?i:College)\s+(?i:of)\s+(?:(?i:the)\s+)?{joined}")),
        // X School of Y, X Business School
        structural(&format!(r"{n}\s+(?i:School)(?:\s+(?i:of)\s+(?:(?i:the)\s+)?{joined})?")),
        structural(&format!(r"(?i:School)\s+(?i:of)\s+(?:(?i:the)\s+)?{joined}")),
    ]
});

static INSTITUTION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)universit|universidad|college|institut|school|[ée]cole|hochschule")
        .expect("Invalid institution regex pattern")
});

static CONNECTOR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:of|and|the|&|at|in|for)$").expect("Invalid institution regex pattern")
});

static OF_EDUCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bof\s+education\b").expect("Invalid institution regex pattern")
});

static TRAILING_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec|january|february|march|april|june|july|august|september|october|november|december|with|honors|honours|distinction|summa|magna|cum|laude)\.?$",
    )
    .expect("Invalid institution regex pattern")
});

/// Discipline words that a connector-free line puts between a degree and its school
static DISCIPLINE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:economics|finance|marketing|accounting|management|statistics|mathematics|physics|chemistry|biology|engineering|psychology|sociology|history|philosophy|business|administration|computer|science|sciences|political|law)$",
    )
    .expect("Invalid institution regex pattern")
});

/// Whether the text contains an institution keyword
pub(crate) fn has_institution_keyword(text: &str) -> bool {
    INSTITUTION_KEYWORD.is_match(text)
}

/// Whether the text is exactly a known short-form institution
pub(crate) fn is_known_institution(text: &str) -> bool {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    KNOWN_INSTITUTIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(&collapsed))
}

/// Validate a cleaned institution candidate
pub fn is_valid_institution(candidate: &str) -> bool {
    if candidate.chars().count() < 3 {
        return false;
    }
    if ROLE_TOKEN.is_match(candidate) || COURSE_TOKEN.is_match(candidate) {
        return false;
    }
    if HEADER_TOKEN.is_match(&OF_EDUCATION.replace_all(candidate, "")) {
        return false;
    }
    has_institution_keyword(candidate) || is_known_institution(candidate)
}

/// Strip qualifiers a structural match can drag along
fn clean_institution(raw: &str) -> String {
    let mut words: Vec<&str> = raw.split_whitespace().collect();

    while words.first().is_some_and(|w| is_degree_token(w)) {
        words.remove(0);
    }
    // "Economics Stanford University": the field ran into the name
    while words.len() > 2
        && DISCIPLINE_WORD.is_match(words[0])
        && !has_institution_keyword(words[1])
        && !CONNECTOR_WORD.is_match(words[1])
    {
        words.remove(0);
    }
    while words
        .last()
        .is_some_and(|w| is_degree_token(w) || TRAILING_QUALIFIER.is_match(w))
    {
        words.pop();
    }

    let mut cleaned = words.join(" ");
    let trimmed_len = cleaned.trim_end_matches([',', ';', ':', '-', '&']).len();
    cleaned.truncate(trimmed_len);

    // "Louis." loses its period, "St." keeps it
    if let Some(stem) = cleaned.split(' ').next_back().and_then(|w| w.strip_suffix('.')) {
        if stem.chars().count() > 2 && !stem.contains('.') {
            cleaned.pop();
        }
    }
    cleaned
}

/// First valid institution in a span of text
pub fn extract_institution(text: &str) -> Option<String> {
    INSTITUTION_PATTERNS.iter().find_map(|pattern| {
        pattern
            .find_iter(text)
            .map(|m| clean_institution(m.as_str()))
            .find(|candidate| is_valid_institution(candidate))
    })
}

/// Institution for a mention: own line first, then a bounded backward walk
///
/// The walk stops at any line carrying section vocabulary ("Education and
/// Publications Overview" counts) and skips vetoed lines.
pub(crate) fn find_institution(ctx: &MentionContext<'_>, lookback: usize) -> Option<String> {
    if let Some(found) = ctx.local_texts().into_iter().find_map(extract_institution) {
        return Some(found);
    }

    for line in ctx.preceding(lookback) {
        if is_section_boundary(&line.text) || HEADER_TOKEN.is_match(&line.text) {
            break;
        }
        if is_excluded(&line.text) {
            continue;
        }
        if let Some(found) = extract_institution(&line.text) {
            return Some(found);
        }
    }
    None
}
