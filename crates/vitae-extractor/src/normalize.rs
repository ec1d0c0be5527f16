//! Text preparation: line splitting, whitespace cleanup, collapsed-word repair

use regex::Regex;
use std::sync::LazyLock;

/// Tokens this long without a space only come from text whose spaces were lost
const COLLAPSED_TOKEN_LEN: usize = 25;

/// Connectors long enough that they never end an ordinary word
static GLUED_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z])(with|under|from|into|over|about)([A-Z])").expect("Invalid connector regex pattern")
});

/// Short connectors are only detached right after an institution keyword
static KEYWORD_CONNECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(University|Institute|College|School)(of|at|in)([A-Z])")
        .expect("Invalid connector regex pattern")
});

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid camel-case regex pattern"));

static GLUED_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w)(University|Institute|College|School)").expect("Invalid keyword regex pattern")
});

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("Invalid whitespace regex pattern"));

/// A non-blank line of the prepared document
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentLine {
    /// 0-based index in the original text
    pub index: usize,
    /// Cleaned line text
    pub text: String,
}

/// Split raw text into cleaned, non-blank lines
///
/// Indices refer to the original document so they stay traceable; window
/// arithmetic elsewhere works on positions in the returned vector.
pub(crate) fn document_lines(text: &str, split_collapsed: bool) -> Vec<DocumentLine> {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    unified
        .split('\n')
        .enumerate()
        .filter_map(|(index, raw)| {
            let mut line = clean_line(raw);
            if split_collapsed && looks_collapsed(&line) {
                line = split_collapsed_words(&line);
            }
            if line.is_empty() {
                None
            } else {
                Some(DocumentLine { index, text: line })
            }
        })
        .collect()
}

/// Strip control characters, collapse runs of spaces and trim
pub(crate) fn clean_line(raw: &str) -> String {
    let visible: String = raw
        .chars()
        .map(|c| if c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect();
    MULTI_SPACE.replace_all(&visible, " ").trim().to_string()
}

fn looks_collapsed(line: &str) -> bool {
    line.split_whitespace()
        .any(|token| token.chars().count() >= COLLAPSED_TOKEN_LEN)
}

/// Re-insert spaces lost during text extraction
///
/// "UniversityofPennsylvania" becomes "University of Pennsylvania".
pub(crate) fn split_collapsed_words(line: &str) -> String {
    let line = GLUED_CONNECTOR.replace_all(line, "$1 $2 $3");
    let line = KEYWORD_CONNECTOR.replace_all(&line, "$1 $2 $3");
    let line = CAMEL_BOUNDARY.replace_all(&line, "$1 $2");
    let line = GLUED_KEYWORD.replace_all(&line, "$1 $2");
    MULTI_SPACE.replace_all(&line, " ").trim().to_string()
}
