use std::fmt::Write;

use crate::parsing::{ListEntry, Node, ParagraphPart, inline::InlineNode};

const INDENT: &str = "  ";

/// Prints `nodes` as an indented tree, one node per line.
///
/// ```text
/// Header(1)
///   Text "Title"
/// List
///   Item "1."
///     Bold
///       Text "due"
/// ```
pub fn normalize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for n in nodes {
        write_node(&mut out, n);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Header { level, content } => {
            line(out, 0, &format!("Header({level})"));
            write_inline(out, 1, content);
        }
        Node::List { entries } => {
            line(out, 0, "List");
            for e in entries {
                write_entry(out, e);
            }
        }
        Node::Paragraph { parts } => {
            line(out, 0, "Paragraph");
            for p in parts {
                match p {
                    ParagraphPart::Header { level, content } => {
                        line(out, 1, &format!("Header({level})"));
                        write_inline(out, 2, content);
                    }
                    ParagraphPart::Line(content) => {
                        line(out, 1, "Line");
                        write_inline(out, 2, content);
                    }
                    ParagraphPart::LineBreak => line(out, 1, "Break"),
                }
            }
        }
    }
}

fn write_entry(out: &mut String, entry: &ListEntry) {
    match &entry.marker {
        Some(m) => line(out, 1, &format!("Item {:?}", m.as_str())),
        None => line(out, 1, "Unmarked"),
    }
    write_inline(out, 2, &entry.content);
}

fn write_inline(out: &mut String, depth: usize, nodes: &[InlineNode]) {
    for n in nodes {
        match n {
            InlineNode::Text(t) => line(out, depth, &format!("Text {t:?}")),
            InlineNode::Italic(t) => line(out, depth, &format!("Italic {t:?}")),
            InlineNode::Bold(children) => {
                line(out, depth, "Bold");
                write_inline(out, depth + 1, children);
            }
        }
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    // writing to a String cannot fail
    let _ = writeln!(out, "{}{text}", INDENT.repeat(depth));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use insta::assert_snapshot;

    #[test]
    fn nested_emphasis_tree() {
        assert_snapshot!(normalize(&render(Some("**a *b* c**"))), @r#"
        Paragraph
          Line
            Bold
              Text "a "
              Italic "b"
              Text " c"
        "#);
    }

    #[test]
    fn unmarked_list_line() {
        assert_snapshot!(normalize(&render(Some("intro\n* x"))), @r#"
        List
          Unmarked
            Text "intro"
          Item "•"
            Text "x"
        "#);
    }
}
