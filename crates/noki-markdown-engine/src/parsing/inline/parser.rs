use super::{
    kinds::{DelimKind, Delimited, Emphasis, Strong},
    types::InlineNode,
};

/// Parses a line of text into a sequence of [`InlineNode`]s.
///
/// # Precedence
/// Bold and italic candidates are collected independently. Any italic
/// candidate whose span touches a bold candidate's span (partially or fully)
/// is dropped, so bold always wins. The inner text of each surviving bold run
/// is parsed again, which is how `**a *b* c**` gets its italic back.
///
/// # Returns
/// When no candidate survives, a single `Text` node holding the input
/// unchanged. Otherwise the text between runs is emitted as `Text` nodes,
/// skipping empty gaps.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let runs = collect_runs(s);
    if runs.is_empty() {
        return vec![InlineNode::Text(s.to_string())];
    }

    let mut out = vec![];
    let mut last = 0;

    for run in runs {
        if run.full.start > last {
            out.push(InlineNode::Text(s[last..run.full.start].to_string()));
        }
        let inner = run.inner.slice(s);
        out.push(match run.kind {
            DelimKind::Bold => InlineNode::Bold(parse_inline(inner)),
            DelimKind::Italic => InlineNode::Italic(inner.to_string()),
        });
        last = run.full.end;
    }

    if last < s.len() {
        out.push(InlineNode::Text(s[last..].to_string()));
    }
    out
}

/// Surviving runs of `s`, ordered by start offset.
pub(crate) fn collect_runs(s: &str) -> Vec<Delimited> {
    let bold = Strong::find_all(s);
    let italic = Emphasis::find_all(s)
        .into_iter()
        .filter(|i| !bold.iter().any(|b| b.full.intersects(i.full)));

    let mut runs: Vec<Delimited> = bold.iter().copied().chain(italic).collect();
    runs.sort_by_key(|r| r.full.start);
    runs
}
