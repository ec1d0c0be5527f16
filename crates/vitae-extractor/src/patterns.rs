//! Degree pattern table
//!
//! An ordered registry of degree-token patterns, each mapped to a canonical
//! label and a credential level. Order matters twice: in single-token mode the
//! first entry with an accepted match names the line's credential, and in
//! multi-token mode earlier entries claim their spans before later ones, so
//! "M.B.A." is claimed by MBA before the B.A. entry can see it.
//!
//! Long forms and punctuated abbreviations match case-insensitively. Bare
//! two- and three-letter forms (MS, MA, BA, BS, AB, JD, MEd, ...) match only in
//! capitals so that "Ms.", "ma" or "ab" in ordinary prose are never taken
//! for credentials.

use regex::Regex;
use std::sync::LazyLock;
use vitae_domain::DegreeLevel;

/// Context check applied to a raw regex match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guard {
    /// Accept every match
    Always,
    /// Reject when the token is the tail of a longer dotted abbreviation ("M.B.A.")
    NotAfterDot,
    /// Bare abbreviation: reject numeric codes ("MA 02139") and trailing state codes ("Boston, MA")
    Bare,
    /// Require a comma, period, parenthesis, digit or line end after the token
    Boundary,
}

/// A compiled degree pattern with its canonical mapping
pub(crate) struct DegreePattern {
    regex: Regex,
    pub label: &'static str,
    pub level: DegreeLevel,
    guard: Guard,
}

/// One accepted token occurrence on a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenMatch {
    pub label: &'static str,
    pub level: DegreeLevel,
    pub start: usize,
    pub end: usize,
}

impl TokenMatch {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

impl DegreePattern {
    fn accepts(&self, line: &str, start: usize, end: usize) -> bool {
        let before = line[..start].chars().next_back();
        let after = line[end..].trim_start();
        let next = after.chars().next();

        match self.guard {
            Guard::Always => true,
            Guard::NotAfterDot => before != Some('.'),
            Guard::Bare => {
                if next.is_some_and(|c| c.is_ascii_digit()) {
                    return false;
                }
                let after_comma = line[..start].trim_end().ends_with(',');
                !(after_comma && after.is_empty())
            }
            Guard::Boundary => match next {
                None => true,
                Some(c) => matches!(c, ',' | '.' | ';' | ':' | '(' | ')') || c.is_ascii_digit(),
            },
        }
    }

    /// Accepted occurrences of this pattern on a line
    fn occurrences<'a>(&'a self, line: &'a str) -> impl Iterator<Item = TokenMatch> + 'a {
        self.regex
            .find_iter(line)
            .filter(move |m| self.accepts(line, m.start(), m.end()))
            .map(move |m| TokenMatch {
                label: self.label,
                level: self.level,
                start: m.start(),
                end: m.end(),
            })
    }
}

fn pattern(regex_str: &str, label: &'static str, level: DegreeLevel, guard: Guard) -> DegreePattern {
    DegreePattern {
        regex: Regex::new(regex_str).expect("Invalid degree regex pattern"),
        label,
        level,
        guard,
    }
}

/// The degree table, most specific level first
pub(crate) static DEGREE_PATTERNS: LazyLock<Vec<DegreePattern>> = LazyLock::new(|| {
    use DegreeLevel::{Masters, Phd, Undergrad};
    use Guard::{Always, Bare, Boundary, NotAfterDot};

    vec![
        // Doctoral
        pattern(r"(?i)\bDoctor\s+of\s+Philosophy\b", "Ph.D.", Phd, Always),
        pattern(r"(?i)\bPh\.?\s?D\b\.?", "Ph.D.", Phd, Always),
        pattern(r"(?i)\bD\.?\s?Phil\b\.?", "D.Phil.", Phd, Always),
        pattern(r"(?i)\bDoctor\s+of\s+Business\s+Administration\b", "D.B.A.", Phd, Always),
        pattern(r"(?i)\bD\.\s?B\.\s?A\b\.?", "D.B.A.", Phd, Always),
        pattern(r"\bDBA\b", "D.B.A.", Phd, Bare),
        pattern(r"(?i)\bDoctor\s+of\s+Education\b", "Ed.D.", Phd, Always),
        pattern(r"(?i)\bEd\.\s?D\b\.?", "Ed.D.", Phd, Always),
        pattern(r"\bEdD\b", "Ed.D.", Phd, Always),
        // Master's
        pattern(r"(?i)\bMaster\s+of\s+Business\s+Administration\b", "MBA", Masters, Always),
        pattern(r"(?i)\bM\.\s?B\.\s?A\b\.?", "MBA", Masters, Always),
        pattern(r"(?i)\bMBA\b", "MBA", Masters, Always),
        pattern(r"(?i)\bMaster\s+of\s+Science\b", "M.S.", Masters, Always),
        pattern(r"(?i)\bM\.\s?Sc\b\.?", "M.Sc.", Masters, Always),
        pattern(r"(?i)\bMSc\b", "M.Sc.", Masters, Always),
        pattern(r"(?i)\bM\.\s?S\b\.?", "M.S.", Masters, Always),
        pattern(r"\bMS\b", "M.S.", Masters, Bare),
        pattern(r"(?i)\bMaster\s+of\s+Arts\b", "M.A.", Masters, Always),
        pattern(r"(?i)\bM\.\s?A\b\.?", "M.A.", Masters, Always),
        pattern(r"\bMA\b", "M.A.", Masters, Bare),
        pattern(r"(?i)\bMaster\s+of\s+Engineering\b", "M.Eng.", Masters, Always),
        pattern(r"(?i)\bM\.\s?Eng\b\.?", "M.Eng.", Masters, Always),
        pattern(r"(?i)\bMEng\b", "M.Eng.", Masters, Always),
        pattern(r"(?i)\bM\.\s?Phil\b\.?", "M.Phil.", Masters, Always),
        pattern(r"(?i)\bMPhil\b", "M.Phil.", Masters, Always),
        pattern(r"(?i)\bMaster\s+of\s+Laws\b", "LL.M.", Masters, Always),
        pattern(r"(?i)\bLL\.\s?M\b\.?", "LL.M.", Masters, Always),
        pattern(r"(?i)\bJuris\s+Doctor\b", "J.D.", Masters, Always),
        pattern(r"(?i)\bJ\.\s?D\b\.?", "J.D.", Masters, Always),
        pattern(r"\bJD\b", "J.D.", Masters, Boundary),
        pattern(r"(?i)\bMaster\s+of\s+Public\s+Administration\b", "MPA", Masters, Always),
        pattern(r"(?i)\bM\.\s?P\.\s?A\b\.?|\bMPA\b", "MPA", Masters, Always),
        pattern(r"(?i)\bMaster\s+of\s+Public\s+Policy\b", "MPP", Masters, Always),
        pattern(r"(?i)\bM\.\s?P\.\s?P\b\.?|\bMPP\b", "MPP", Masters, Always),
        pattern(r"(?i)\bMaster\s+of\s+Public\s+Health\b", "MPH", Masters, Always),
        pattern(r"(?i)\bM\.\s?P\.\s?H\b\.?|\bMPH\b", "MPH", Masters, Always),
        pattern(r"(?i)\bMaster\s+of\s+Education\b", "M.Ed.", Masters, Always),
        pattern(r"(?i)\bM\.\s?Ed\b\.?", "M.Ed.", Masters, Always),
        pattern(r"\bMEd\b", "M.Ed.", Masters, Always),
        pattern(r"(?i)\bLicentiaat\b", "Licentiaat", Masters, Always),
        // Bachelor's
        pattern(r"(?i)\bBachelor\s+of\s+Business\s+Administration\b", "BBA", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?B\.\s?A\b\.?|\bBBA\b", "BBA", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?S\.\s?B\b\.?|\bBSB\b", "B.S.B.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?Sc\b\.?", "B.Sc.", Undergrad, NotAfterDot),
        pattern(r"(?i)\bBSc\b", "B.Sc.", Undergrad, Always),
        pattern(r"(?i)\bBachelor\s+of\s+Science\b", "B.S.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?S\b\.?", "B.S.", Undergrad, NotAfterDot),
        pattern(r"\bBS\b", "B.S.", Undergrad, Bare),
        pattern(r"(?i)\bBachelor\s+of\s+Arts\b", "B.A.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?A\b\.?", "B.A.", Undergrad, NotAfterDot),
        pattern(r"\bBA\b", "B.A.", Undergrad, Bare),
        pattern(r"(?i)\bBachelor\s+of\s+Technology\b", "B.Tech.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?Tech\b\.?|(?i)\bBTech\b", "B.Tech.", Undergrad, Always),
        pattern(r"(?i)\bBachelor\s+of\s+Engineering\b", "B.Eng.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?Eng\b\.?|(?i)\bBEng\b", "B.Eng.", Undergrad, Always),
        pattern(r"(?i)\bBachelor\s+of\s+Commerce\b", "B.Com.", Undergrad, Always),
        pattern(r"(?i)\bB\.\s?Com\b\.?|\bBCom\b", "B.Com.", Undergrad, Always),
        pattern(r"(?i)\bA\.\s?B\b\.?", "A.B.", Undergrad, NotAfterDot),
        pattern(r"\bAB\b", "A.B.", Undergrad, Boundary),
        pattern(r"(?i)\bKandidaat\b", "Kandidaat", Undergrad, Always),
    ]
});

/// First table entry with an accepted match on the line
pub(crate) fn first_token(line: &str) -> Option<TokenMatch> {
    DEGREE_PATTERNS
        .iter()
        .find_map(|p| p.occurrences(line).next())
}

/// Every non-overlapping token occurrence on the line, in position order
///
/// Entries claim spans in table order; a later entry never matches inside a
/// span an earlier entry already claimed.
pub(crate) fn all_tokens(line: &str) -> Vec<TokenMatch> {
    let mut claimed: Vec<TokenMatch> = Vec::new();
    for p in DEGREE_PATTERNS.iter() {
        for token in p.occurrences(line) {
            if !claimed.iter().any(|c| c.overlaps(token.start, token.end)) {
                claimed.push(token);
            }
        }
    }
    claimed.sort_by_key(|t| t.start);
    claimed
}

/// Whether the text, ignoring surrounding punctuation, is exactly one degree token
pub(crate) fn is_degree_token(text: &str) -> bool {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':'));
    if trimmed.is_empty() {
        return false;
    }
    DEGREE_PATTERNS.iter().any(|p| {
        p.regex
            .find(trimmed)
            .is_some_and(|m| m.start() == 0 && m.end() == trimmed.len())
    })
}

/// Whether any degree token occurs in the text
pub(crate) fn contains_degree_token(text: &str) -> bool {
    first_token(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(line: &str) -> Vec<&'static str> {
        all_tokens(line).into_iter().map(|t| t.label).collect()
    }

    #[test]
    fn test_phd_variants() {
        for line in ["Ph.D., Finance", "PhD in Finance", "Ph. D. Finance", "Doctor of Philosophy, Finance"] {
            let token = first_token(line).unwrap();
            assert_eq!(token.label, "Ph.D.", "line: {line}");
            assert_eq!(token.level, DegreeLevel::Phd);
        }
    }

    #[test]
    fn test_mba_claims_before_ba() {
        assert_eq!(labels("M.B.A., Harvard Business School"), vec!["MBA"]);
        assert_eq!(labels("MBA 1995"), vec!["MBA"]);
    }

    #[test]
    fn test_multiple_tokens_in_position_order() {
        assert_eq!(labels("B.A., M.A., Economics, Yale University"), vec!["B.A.", "M.A."]);
    }

    #[test]
    fn test_word_boundaries() {
        assert!(first_token("Princeton University Press").is_none());
        assert!(first_token("Ms. Jane Smith").is_none());
        assert_eq!(first_token("MSc Statistics").map(|t| t.label), Some("M.Sc."));
        assert!(first_token("PhDs in the lab").is_none());
    }

    #[test]
    fn test_bare_abbreviation_guard() {
        assert!(first_token("Cambridge, MA 02139").is_none());
        assert!(first_token("Boston, MA").is_none());
        assert_eq!(first_token("MA in Economics").map(|t| t.label), Some("M.A."));
        assert!(first_token("Room BS 204").is_none());
    }

    #[test]
    fn test_ab_needs_boundary() {
        assert_eq!(first_token("AB, Harvard College, 1990").map(|t| t.label), Some("A.B."));
        assert_eq!(first_token("AB 1990").map(|t| t.label), Some("A.B."));
        assert!(first_token("AB Testing Platform").is_none());
    }

    #[test]
    fn test_bsb_before_bs() {
        assert_eq!(labels("B.S.B., Finance"), vec!["B.S.B."]);
    }

    #[test]
    fn test_is_degree_token() {
        assert!(is_degree_token("Ph.D."));
        assert!(is_degree_token(" MBA, "));
        assert!(!is_degree_token("Finance"));
        assert!(!is_degree_token("MBA program"));
    }
}
