//! Field-of-study extraction
//!
//! Patterns are anchored on the text immediately after the mention's degree
//! token, so "M.B.A." and "MBA" anchor identically. A match that fails
//! validation falls through to the next pattern; it is never trimmed into a
//! shorter, possibly wrong, field.

use crate::config::ExtractorConfig;
use crate::context::MentionContext;
use crate::exclusion::{is_excluded, COURSE_TOKEN, ROLE_TOKEN, SERVICE_TOKEN};
use crate::institution::{has_institution_keyword, is_known_institution};
use crate::patterns::{contains_degree_token, is_degree_token};
use regex::Regex;
use std::sync::LazyLock;

/// Field text: letters, spaces and a few joiners, matched lazily
const FIELD: &str = r"(?P<field>\p{L}[\p{L}\s&'/\-]*?)";
const CAPITALISED_FIELD: &str = r"(?P<field>\p{Lu}[\p{L}\s&'/\-]*?)";

/// Where a field stops: punctuation, a year, "from"/"at", or line end
const TERM: &str = r"\s*[,;:()|]|\.(?:\s|$)|\s+(?:19|20)\d{2}\b|\s+(?i:from|at)\s|\s*$";

/// An institution name starting right after the field
const INSTITUTION_TERM: &str =
    r"\s+(?:(?i:the)\s+)?(?:\p{Lu}[\p{L}.'&\-]*\s+)?(?i:University|College|Institute|School)\b";

fn field_pattern(prefix: &str, field: &str, stop_at_institution: bool) -> Regex {
    let term = if stop_at_institution {
        format!("{TERM}|{INSTITUTION_TERM}")
    } else {
        TERM.to_string()
    };
    Regex::new(&format!("{prefix}{field}(?:{term})")).expect("Invalid field regex pattern")
}

static FIELD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // <Degree> in/of <Field>, Licentiaat in de <Field>
        field_pattern(r"^\s*,?\s*(?i:in|of)\s+(?:(?i:de)\s+)?", FIELD, true),
        // <Degree>, Concentration in <Field>
        field_pattern(
            r"^[\s,;:(]*(?i:concentration|specialization|specialisation|major|emphasis)\s*(?:(?i:in)\s+|[:\-–]\s*)?",
            FIELD,
            true,
        ),
        // <Degree> (<Field>)
        field_pattern(r"^\s*\(", FIELD, false),
        // <Degree> <Field>,
        field_pattern(r"^\s+", CAPITALISED_FIELD, false),
        // <Degree>, <Field>
        field_pattern(r"^\s*[,:]\s*", FIELD, false),
    ]
});

/// "Major: Economics", "Academic Area: Operations, Information & Technology"
static LABELLED_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:major|concentration|speciali[sz]ation|field\s+of\s+study|field|academic\s*area|area\s+of\s+study)\s*[:\-–]\s*(?P<field>[^;()|]+?)\s*(?:[;()|]|\b(?:19|20)\d{2}\b|$)",
    )
    .expect("Invalid field regex pattern")
});

static HONORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:honou?rs?|distinction|summa|magna|cum\s+laude|laude|dean'?s\s+list)\b")
        .expect("Invalid field regex pattern")
});

static MONTH_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b",
    )
    .expect("Invalid field regex pattern")
});

static LEADING_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:in|of|de)\s+").expect("Invalid field regex pattern")
});

static TRAILING_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:from|at|and)$").expect("Invalid field regex pattern")
});

/// Normalise a raw field span
fn clean_field(raw: &str) -> String {
    let field = raw.trim();
    let field = LEADING_CONNECTOR.replace(field, "");
    let field = TRAILING_CONNECTOR.replace(&field, "");
    field
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '-'))
        .to_string()
}

/// Validate a cleaned field of study
pub fn is_valid_field(field: &str) -> bool {
    let len = field.chars().count();
    if !(3..=60).contains(&len) || field.split_whitespace().count() > 6 {
        return false;
    }
    if field.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if has_institution_keyword(field) || is_known_institution(field) {
        return false;
    }
    if ROLE_TOKEN.is_match(field) || SERVICE_TOKEN.is_match(field) || COURSE_TOKEN.is_match(field) {
        return false;
    }
    if HONORS.is_match(field) || MONTH_START.is_match(field) {
        return false;
    }
    !is_degree_token(field) && !contains_degree_token(field)
}

fn validated(raw: &str) -> Option<String> {
    let field = clean_field(raw);
    is_valid_field(&field).then_some(field)
}

/// "B.A., M.A., Economics": a token directly followed by more tokens, then the field
fn shared_field(after: &str) -> Option<String> {
    let mut chunks = after.split([',', ';']).map(str::trim);
    if !chunks.next()?.is_empty() {
        return None;
    }

    let mut saw_degree = false;
    for chunk in chunks {
        if is_degree_token(chunk) {
            saw_degree = true;
            continue;
        }
        return if saw_degree { validated(chunk) } else { None };
    }
    None
}

/// Field stated directly after a degree token
pub fn field_after_token(after: &str) -> Option<String> {
    FIELD_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.captures(after))
        .filter_map(|caps| caps.name("field"))
        .find_map(|m| validated(m.as_str()))
        .or_else(|| shared_field(after))
}

/// Field from a "Major: X" style label; `anchored` requires the label to open the line
fn labelled_field(text: &str, anchored: bool) -> Option<String> {
    let caps = LABELLED_FIELD.captures(text)?;
    if anchored && caps.get(0).is_some_and(|m| m.start() > 0) {
        return None;
    }
    validated(caps.name("field")?.as_str())
}

/// Field for a mention: after its token, a label on its line, then labelled neighbours
pub(crate) fn find_field(ctx: &MentionContext<'_>, config: &ExtractorConfig) -> Option<String> {
    if let Some(field) = field_after_token(ctx.mention.after_token()) {
        return Some(field);
    }
    if let Some(field) = labelled_field(ctx.segment, false) {
        return Some(field);
    }

    ctx.neighbours(config.field_window)
        .filter(|l| !is_excluded(&l.text) && !contains_degree_token(&l.text))
        .find_map(|l| labelled_field(&l.text, true))
}
