use super::{
    builder::ListBuilder,
    kinds::{Heading, ListLine, Paragraph},
    types::{BlockKind, ParagraphLine},
};

/// Classifies raw blocks for the block phase.
///
/// Precedence: a block that is a single heading line is a header; otherwise
/// any marker line anywhere in the block makes it a list; everything else is
/// a paragraph.
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify(&self, raw: &str) -> BlockKind {
        // a block can still carry one stray line terminator at either end
        let raw = raw.trim_matches(['\r', '\n']);

        if let Some((level, text)) = Heading::parse(raw) {
            return BlockKind::Header {
                level,
                text: text.to_string(),
            };
        }

        if raw.lines().any(ListLine::is_marker_line) {
            let mut builder = ListBuilder::new();
            for line in raw.lines() {
                builder.push(line);
            }
            return BlockKind::List {
                items: builder.finish(),
            };
        }

        BlockKind::Paragraph {
            lines: Paragraph::lines(raw).map(Self::paragraph_line).collect(),
        }
    }

    fn paragraph_line(line: &str) -> ParagraphLine {
        match Heading::parse(line) {
            Some((level, text)) => ParagraphLine::Header {
                level,
                text: text.to_string(),
            },
            None => ParagraphLine::Text(line.to_string()),
        }
    }
}
