use super::{
    blocks::{Block, BlockKind, ListItem, ListMarker, ParagraphLine},
    inline::{InlineNode, parse_inline},
};

/// A rendered block, ready for presentation.
///
/// Position in the output sequence is the node's only identity; it is stable
/// within one render pass and means nothing across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Header {
        level: u8,
        content: Vec<InlineNode>,
    },
    List {
        entries: Vec<ListEntry>,
    },
    Paragraph {
        parts: Vec<ParagraphPart>,
    },
}

/// A list entry with its text parsed inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// `None` for an unmarked line kept in place inside the list.
    pub marker: Option<ListMarker>,
    pub content: Vec<InlineNode>,
}

impl ListEntry {
    pub fn is_list_item(&self) -> bool {
        self.marker.is_some()
    }
}

/// A piece of a paragraph block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphPart {
    /// A heading line embedded in the paragraph.
    Header {
        level: u8,
        content: Vec<InlineNode>,
    },
    Line(Vec<InlineNode>),
    /// Explicit break between two consecutive text lines.
    LineBreak,
}

/// Second stage: parses the inline content of every classified block.
pub fn build_nodes(blocks: &[Block]) -> Vec<Node> {
    blocks.iter().map(|b| build_node(&b.kind)).collect()
}

fn build_node(kind: &BlockKind) -> Node {
    match kind {
        BlockKind::Header { level, text } => Node::Header {
            level: *level,
            content: parse_inline(text),
        },
        BlockKind::List { items } => Node::List {
            entries: items.iter().map(build_entry).collect(),
        },
        BlockKind::Paragraph { lines } => Node::Paragraph {
            parts: build_paragraph(lines),
        },
    }
}

fn build_entry(item: &ListItem) -> ListEntry {
    ListEntry {
        marker: item.marker.clone(),
        content: parse_inline(&item.text),
    }
}

fn build_paragraph(lines: &[ParagraphLine]) -> Vec<ParagraphPart> {
    let mut parts = Vec::with_capacity(lines.len() * 2);
    let mut prev_was_text = false;

    for line in lines {
        match line {
            ParagraphLine::Header { level, text } => {
                parts.push(ParagraphPart::Header {
                    level: *level,
                    content: parse_inline(text),
                });
                prev_was_text = false;
            }
            ParagraphLine::Text(text) => {
                if prev_was_text {
                    parts.push(ParagraphPart::LineBreak);
                }
                parts.push(ParagraphPart::Line(parse_inline(text)));
                prev_was_text = true;
            }
        }
    }

    parts
}
