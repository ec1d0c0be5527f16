//! Per-mention view of the surrounding document

use crate::normalize::DocumentLine;
use vitae_domain::DegreeMention;

/// Separators that end a mention's segment when another mention follows on the line
const SEGMENT_SEPARATORS: [char; 2] = [';', '|'];

/// Everything a context extractor may look at for one mention
///
/// `position` indexes `lines` (non-blank lines only), so "the line above"
/// always means the preceding non-blank line.
pub(crate) struct MentionContext<'a> {
    pub mention: &'a DegreeMention,
    /// From the mention's token up to the next mention on the line
    pub segment: &'a str,
    /// From the previous mention's segment up to this mention's token
    pub lead: &'a str,
    pub lines: &'a [DocumentLine],
    pub position: usize,
}

impl<'a> MentionContext<'a> {
    /// Build a context; `next_start` is the byte offset of the next mention on the same line
    pub fn new(
        mention: &'a DegreeMention,
        prev_cut: usize,
        next_start: Option<usize>,
        lines: &'a [DocumentLine],
        position: usize,
    ) -> Self {
        let line = mention.line.as_str();
        let cut = segment_end(line, mention.end, next_start);
        Self {
            mention,
            segment: &line[mention.start..cut],
            lead: &line[prev_cut.min(mention.start)..mention.start],
            lines,
            position,
        }
    }

    /// Byte offset where this mention's segment ends
    pub fn segment_end(&self) -> usize {
        self.mention.start + self.segment.len()
    }

    /// Own-line texts, narrowest first: segment, lead-in, whole line
    pub fn local_texts(&self) -> [&'a str; 3] {
        let mention = self.mention;
        [self.segment, self.lead, mention.line.as_str()]
    }

    /// Neighbour lines within `window`, nearest first, the line above before the line below
    pub fn neighbours(&self, window: usize) -> impl Iterator<Item = &'a DocumentLine> {
        let (lines, position) = (self.lines, self.position);
        (1..=window).flat_map(move |offset| {
            let above = position.checked_sub(offset).map(|p| &lines[p]);
            let below = lines.get(position + offset);
            above.into_iter().chain(below)
        })
    }

    /// Up to `count` preceding lines, nearest first
    pub fn preceding(&self, count: usize) -> impl Iterator<Item = &'a DocumentLine> {
        let lines = self.lines;
        let from = self.position.saturating_sub(count);
        lines[from..self.position].iter().rev()
    }
}

fn segment_end(line: &str, token_end: usize, next_start: Option<usize>) -> usize {
    match next_start {
        None => line.len(),
        Some(next) => line[token_end..next]
            .rfind(SEGMENT_SEPARATORS)
            .map(|offset| token_end + offset)
            .unwrap_or(next),
    }
}
