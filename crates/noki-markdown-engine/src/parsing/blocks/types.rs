use crate::parsing::span::Span;

use super::kinds::ListMarker;

/// A paragraph-level unit of the document, delimited by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Byte span of the raw block in the source text.
    pub span: Span,
    pub kind: BlockKind,
}

/// What a block was classified as, with its text still unparsed inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// The whole block is one heading line.
    Header { level: u8, text: String },
    /// At least one line of the block carries a list marker.
    List { items: Vec<ListItem> },
    /// Anything else, line by line.
    Paragraph { lines: Vec<ParagraphLine> },
}

impl BlockKind {
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Header { .. } => "Header",
            BlockKind::List { .. } => "List",
            BlockKind::Paragraph { .. } => "Paragraph",
        }
    }
}

/// One entry of a list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// `None` for a line that appeared before any marker line.
    pub marker: Option<ListMarker>,
    /// Item text, extended by continuation lines.
    pub text: String,
}

impl ListItem {
    pub fn is_list_item(&self) -> bool {
        self.marker.is_some()
    }
}

/// One line of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphLine {
    /// A line that is a heading on its own.
    Header { level: u8, text: String },
    Text(String),
}
