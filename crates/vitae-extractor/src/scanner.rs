//! Token scanner - walks the document and yields raw degree mentions

use crate::exclusion::exclusion_category;
use crate::normalize::DocumentLine;
use crate::patterns::{all_tokens, first_token, TokenMatch};
use tracing::trace;
use vitae_domain::DegreeMention;

/// Scan every line for degree tokens
///
/// The exclusion veto runs before any pattern is tried. With `multi_token`
/// every non-overlapping token on a line becomes its own mention; otherwise
/// only the first table match is taken. Mentions come back in document order,
/// and within a line in token order.
pub(crate) fn scan(lines: &[DocumentLine], multi_token: bool) -> Vec<DegreeMention> {
    let mut mentions = Vec::new();

    for line in lines {
        if let Some(category) = exclusion_category(&line.text) {
            trace!("Line {} excluded ({}): {}", line.index, category, line.text);
            continue;
        }

        let tokens = if multi_token {
            all_tokens(&line.text)
        } else {
            first_token(&line.text).into_iter().collect()
        };

        mentions.extend(tokens.into_iter().map(|t| to_mention(line, t)));
    }

    mentions
}

fn to_mention(line: &DocumentLine, token: TokenMatch) -> DegreeMention {
    DegreeMention {
        line_index: line.index,
        label: token.label.to_string(),
        level: token.level,
        line: line.text.clone(),
        token: line.text[token.start..token.end].to_string(),
        start: token.start,
        end: token.end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::document_lines;
    use vitae_domain::DegreeLevel;

    #[test]
    fn test_excluded_line_yields_nothing() {
        let lines = document_lines("Assistant Professor, MBA program\nMBA, INSEAD, 2004", false);
        let mentions = scan(&lines, true);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].line_index, 1);
    }

    #[test]
    fn test_multi_token_line() {
        let lines = document_lines("B.A., M.A., Economics, Yale University, 2001", false);
        let mentions = scan(&lines, true);
        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].level, DegreeLevel::Undergrad);
        assert_eq!(mentions[1].level, DegreeLevel::Masters);
        assert_eq!(mentions[1].token, "M.A.");
        assert_eq!(mentions[1].after_token(), ", Economics, Yale University, 2001");
    }

    #[test]
    fn test_single_token_mode_takes_first_table_match() {
        let lines = document_lines("B.A., M.A., Economics, Yale University, 2001", false);
        let mentions = scan(&lines, false);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].label, "M.A.");
    }

    #[test]
    fn test_document_order() {
        let text = "Ph.D., Finance, Stanford University, 2009\n\nB.S., MIT, 2003";
        let lines = document_lines(text, false);
        let mentions = scan(&lines, true);
        let indices: Vec<usize> = mentions.iter().map(|m| m.line_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
