use noki_markdown_engine::{InlineNode, ListEntry, Node, ParagraphPart, RenderOptions};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Converts rendered nodes into styled terminal lines.
///
/// Blocks are separated by an empty line. Bold and italic become text
/// modifiers and stack when nested.
pub fn to_lines(nodes: &[Node], opts: &RenderOptions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match node {
            Node::Header { level, content } => lines.push(heading_line(*level, content)),
            Node::List { entries } => {
                lines.extend(entries.iter().map(|e| entry_line(e, opts)));
            }
            Node::Paragraph { parts } => paragraph_lines(&mut lines, parts),
        }
    }

    lines
}

fn heading_style(level: u8) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        2 => base.fg(Color::Cyan),
        3 => base.fg(Color::Blue),
        _ => base,
    }
}

fn heading_line(level: u8, content: &[InlineNode]) -> Line<'static> {
    let mut spans = Vec::new();
    push_spans(&mut spans, content, heading_style(level));
    Line::from(spans)
}

fn entry_line(entry: &ListEntry, opts: &RenderOptions) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(marker) = &entry.marker {
        spans.push(Span::styled(
            format!("  {} ", opts.marker_text(marker)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    push_spans(&mut spans, &entry.content, Style::default());
    Line::from(spans)
}

fn paragraph_lines(lines: &mut Vec<Line<'static>>, parts: &[ParagraphPart]) {
    let mut current: Vec<Span<'static>> = Vec::new();

    for part in parts {
        match part {
            ParagraphPart::Header { level, content } => {
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                lines.push(heading_line(*level, content));
            }
            ParagraphPart::Line(content) => push_spans(&mut current, content, Style::default()),
            ParagraphPart::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
}

fn push_spans(spans: &mut Vec<Span<'static>>, nodes: &[InlineNode], style: Style) {
    for n in nodes {
        match n {
            InlineNode::Text(t) => spans.push(Span::styled(t.clone(), style)),
            InlineNode::Bold(children) => {
                push_spans(spans, children, style.add_modifier(Modifier::BOLD));
            }
            InlineNode::Italic(t) => {
                spans.push(Span::styled(t.clone(), style.add_modifier(Modifier::ITALIC)));
            }
        }
    }
}
