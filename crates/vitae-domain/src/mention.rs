//! Degree mention module - raw scanner output

use crate::DegreeLevel;

/// A credential token found on one line, before any context is harvested
///
/// Mentions are ephemeral: the scanner produces them and context extraction
/// consumes them immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeMention {
    /// 0-based line index in the original document
    pub line_index: usize,

    /// Canonical degree label
    pub label: String,

    /// Credential level
    pub level: DegreeLevel,

    /// The line the token was found on (after text preparation)
    pub line: String,

    /// The token text exactly as it appeared (e.g. "M.B.A.", "Doctor of Philosophy")
    pub token: String,

    /// Byte offset of the token within `line`
    pub start: usize,

    /// Byte offset one past the token within `line`
    pub end: usize,
}

impl DegreeMention {
    /// The rest of the line after the token
    pub fn after_token(&self) -> &str {
        &self.line[self.end..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_token() {
        let line = "2010 Ph.D., Finance".to_string();
        let mention = DegreeMention {
            line_index: 4,
            label: "Ph.D.".to_string(),
            level: DegreeLevel::Phd,
            token: "Ph.D.".to_string(),
            start: 5,
            end: 10,
            line,
        };
        assert_eq!(mention.after_token(), ", Finance");
    }
}
