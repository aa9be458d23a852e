use crate::parsing::{Node, ParagraphPart, inline::plain_text};

/// Extracts the visible text of `nodes` with every structural marker removed.
///
/// Blocks are separated by a blank line; list entries, paragraph lines, and
/// embedded headings each take one line. List markers are dropped, so the
/// output never re-parses as a list, heading, or emphasis as long as the
/// source markers were all consumed.
pub fn to_plain_text(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(block_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_text(node: &Node) -> String {
    match node {
        Node::Header { content, .. } => plain_text(content),
        Node::List { entries } => entries
            .iter()
            .map(|e| plain_text(&e.content))
            .collect::<Vec<_>>()
            .join("\n"),
        Node::Paragraph { parts } => parts
            .iter()
            .filter_map(|p| match p {
                ParagraphPart::Header { content, .. } | ParagraphPart::Line(content) => {
                    Some(plain_text(content))
                }
                ParagraphPart::LineBreak => None,
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
