use crate::parsing::{
    Node, ParagraphPart,
    blocks::kinds::Heading,
    inline::{InlineNode, kinds::Emphasis},
};

/// Asserts the structural rules every rendered tree must satisfy.
///
/// # Panics
/// On the first violation, with a message naming it.
pub fn check(nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Header { level, content } => {
                check_level(*level);
                check_inline(content);
            }
            Node::List { entries } => {
                assert!(!entries.is_empty(), "list block without entries");
                for e in entries {
                    check_inline(&e.content);
                }
            }
            Node::Paragraph { parts } => check_paragraph(parts),
        }
    }
}

fn check_level(level: u8) {
    assert!(
        (Heading::MIN_LEVEL..=Heading::MAX_LEVEL).contains(&level),
        "header level out of range: {level}"
    );
}

fn check_paragraph(parts: &[ParagraphPart]) {
    assert!(!parts.is_empty(), "paragraph without parts");
    for (i, part) in parts.iter().enumerate() {
        match part {
            ParagraphPart::Header { level, content } => {
                check_level(*level);
                check_inline(content);
            }
            ParagraphPart::Line(content) => check_inline(content),
            ParagraphPart::LineBreak => {
                let between_lines = i > 0
                    && matches!(parts[i - 1], ParagraphPart::Line(_))
                    && matches!(parts.get(i + 1), Some(ParagraphPart::Line(_)));
                assert!(between_lines, "line break at {i} is not between two lines");
            }
        }
    }
}

fn check_inline(nodes: &[InlineNode]) {
    assert!(!nodes.is_empty(), "empty inline sequence");
    for (i, n) in nodes.iter().enumerate() {
        match n {
            InlineNode::Text(t) => {
                assert!(
                    !t.is_empty() || nodes.len() == 1,
                    "empty text node next to emphasis: {nodes:?}"
                );
                if i > 0 {
                    assert!(
                        !matches!(nodes[i - 1], InlineNode::Text(_)),
                        "adjacent text nodes: {nodes:?}"
                    );
                }
            }
            InlineNode::Italic(t) => {
                assert!(!t.is_empty(), "empty italic");
                assert!(
                    !t.contains(Emphasis::STAR as char) && !t.contains('\n'),
                    "italic spans a delimiter or line: {t:?}"
                );
            }
            InlineNode::Bold(children) => check_inline(children),
        }
    }
}
