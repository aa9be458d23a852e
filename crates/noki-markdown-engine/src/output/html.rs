use html_escape::encode_text;

use crate::parsing::{ListEntry, Node, ParagraphPart, inline::InlineNode};

use super::RenderOptions;

/// Renders nodes as an HTML fragment, one block per line.
///
/// All source text is escaped. Headers map to `<h1>`–`<h6>`, emphasis to
/// `<strong>`/`<em>`, lists and paragraphs to `div`s with `md-*` classes.
/// Paragraphs are `div`s rather than `p`s because they may hold headings.
pub fn to_html(nodes: &[Node], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        push_node(&mut out, node, opts);
    }
    out
}

fn push_node(out: &mut String, node: &Node, opts: &RenderOptions) {
    match node {
        Node::Header { level, content } => {
            push_heading(out, *level, content);
            out.push('\n');
        }
        Node::List { entries } => {
            out.push_str("<div class=\"md-list\">\n");
            for entry in entries {
                push_entry(out, entry, opts);
            }
            out.push_str("</div>\n");
        }
        Node::Paragraph { parts } => {
            out.push_str("<div class=\"md-paragraph\">");
            for part in parts {
                match part {
                    ParagraphPart::Header { level, content } => push_heading(out, *level, content),
                    ParagraphPart::Line(content) => push_inline(out, content),
                    ParagraphPart::LineBreak => out.push_str("<br />"),
                }
            }
            out.push_str("</div>\n");
        }
    }
}

fn push_heading(out: &mut String, level: u8, content: &[InlineNode]) {
    out.push_str(&format!("<h{level}>"));
    push_inline(out, content);
    out.push_str(&format!("</h{level}>"));
}

fn push_entry(out: &mut String, entry: &ListEntry, opts: &RenderOptions) {
    match &entry.marker {
        Some(marker) => {
            out.push_str("<div class=\"md-list-item\"><span class=\"md-marker\">");
            out.push_str(&encode_text(opts.marker_text(marker)));
            out.push_str("</span> ");
        }
        None => out.push_str("<div class=\"md-list-line\">"),
    }
    push_inline(out, &entry.content);
    out.push_str("</div>\n");
}

fn push_inline(out: &mut String, nodes: &[InlineNode]) {
    for n in nodes {
        match n {
            InlineNode::Text(t) => out.push_str(&encode_text(t)),
            InlineNode::Bold(children) => {
                out.push_str("<strong>");
                push_inline(out, children);
                out.push_str("</strong>");
            }
            InlineNode::Italic(t) => {
                out.push_str("<em>");
                out.push_str(&encode_text(t));
                out.push_str("</em>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use insta::assert_snapshot;

    fn html(md: &str) -> String {
        to_html(&render(Some(md)), &RenderOptions::default())
    }

    #[test]
    fn header_and_emphasis() {
        assert_snapshot!(html("# Title\n\n**bold** and *italic*"), @r#"
        <h1>Title</h1>
        <div class="md-paragraph"><strong>bold</strong> and <em>italic</em></div>
        "#);
    }

    #[test]
    fn list_with_unmarked_line() {
        assert_snapshot!(html("Today:\n1. Revise\n- Gym"), @r#"
        <div class="md-list">
        <div class="md-list-line">Today:</div>
        <div class="md-list-item"><span class="md-marker">1.</span> Revise</div>
        <div class="md-list-item"><span class="md-marker">•</span> Gym</div>
        </div>
        "#);
    }

    #[test]
    fn paragraph_breaks_and_embedded_heading() {
        assert_snapshot!(html("one\ntwo\n## Sub\nthree"), @r#"<div class="md-paragraph">one<br />two<h2>Sub</h2>three</div>"#);
    }

    #[test]
    fn text_is_escaped() {
        assert_snapshot!(html("a <b> & *c<d>*"), @r#"<div class="md-paragraph">a &lt;b&gt; &amp; <em>c&lt;d&gt;</em></div>"#);
    }

    #[test]
    fn custom_bullet_is_escaped() {
        let opts = RenderOptions {
            bullet: "<>".to_string(),
        };
        let out = to_html(&render(Some("- x")), &opts);
        assert!(out.contains(r#"<span class="md-marker">&lt;&gt;</span> x"#));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(html(""), "");
    }
}
