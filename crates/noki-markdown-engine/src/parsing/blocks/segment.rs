use regex::Regex;
use std::sync::OnceLock;

use crate::parsing::span::Span;

fn blank_run_pattern() -> &'static Regex {
    static BLANK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_RUN_REGEX
        .get_or_init(|| Regex::new(r"(?:\r?\n){2,}").expect("Invalid blank run regex"))
}

/// Splits `text` on runs of two or more newlines.
///
/// Returns the span of every raw block in source order. Blocks that are
/// empty after trimming are dropped.
pub fn segment(text: &str) -> Vec<Span> {
    let mut out = vec![];
    let mut start = 0;

    for sep in blank_run_pattern().find_iter(text) {
        push_block(&mut out, text, Span::new(start, sep.start()));
        start = sep.end();
    }
    push_block(&mut out, text, Span::new(start, text.len()));

    out
}

fn push_block(out: &mut Vec<Span>, text: &str, span: Span) {
    if !span.slice(text).trim().is_empty() {
        out.push(span);
    }
}
