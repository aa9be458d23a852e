use crate::parsing::{inline::cursor::Cursor, span::Span};

use super::{DelimKind, Delimited};

/// Italic emphasis: `*text*`.
///
/// Only a lone `*` (no `*` directly before or after it) can open or close an
/// italic run, so the halves of a `**` pair are never mistaken for italics.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    const NEWLINE: u8 = b'\n';

    /// Collects every italic candidate in `s`, scanning left to right.
    pub fn find_all(s: &str) -> Vec<Delimited> {
        let mut cur = Cursor::new(s);
        let mut out = vec![];
        while !cur.eof() {
            if let Some(d) = Self::try_parse(&mut cur) {
                out.push(d);
                continue;
            }
            cur.bump();
        }
        out
    }

    /// Attempts to match `*…*` at the cursor. Content is non-empty, has no
    /// `*` and does not cross a newline.
    ///
    /// On failure the cursor is restored.
    pub fn try_parse(cur: &mut Cursor<'_>) -> Option<Delimited> {
        if !Self::at_lone_star(cur) {
            return None;
        }

        let saved = cur.clone();
        let start = cur.pos();
        cur.bump();
        let inner_start = cur.pos();

        while let Some(b) = cur.peek() {
            if b == Self::STAR {
                break;
            }
            if b == Self::NEWLINE {
                *cur = saved;
                return None;
            }
            cur.bump();
        }
        let inner_end = cur.pos();

        if inner_end == inner_start || !Self::at_lone_star(cur) {
            *cur = saved;
            return None;
        }
        cur.bump();

        Some(Delimited {
            kind: DelimKind::Italic,
            full: Span::new(start, cur.pos()),
            inner: Span::new(inner_start, inner_end),
        })
    }

    fn at_lone_star(cur: &Cursor<'_>) -> bool {
        cur.peek() == Some(Self::STAR)
            && cur.prev() != Some(Self::STAR)
            && cur.peek_next() != Some(Self::STAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn inners(s: &str) -> Vec<&str> {
        Emphasis::find_all(s)
            .into_iter()
            .map(|d| d.inner.slice(s))
            .collect()
    }

    #[rstest]
    #[case("*a*", vec!["a"])]
    #[case("x *one* y *two*", vec!["one", "two"])]
    #[case("**bold** and *italic*", vec!["italic"])]
    #[case("a * b", vec![])]
    #[case("**", vec![])]
    #[case("*a\nb*", vec![])]
    #[case("*unclosed", vec![])]
    #[case("*a **b** c*", vec![])]
    #[case("*foo**bar*", vec![])]
    fn italic_candidates(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(inners(input), expected);
    }

    #[test]
    fn inner_star_of_bold_pair_is_a_candidate() {
        // overlap filtering happens in the parser, not here
        let s = "**outer *not-italic* still bold**";
        assert_eq!(inners(s), vec!["not-italic"]);
    }

    #[test]
    fn spans_include_delimiters() {
        let found = Emphasis::find_all("say *hi*");
        assert_eq!(found[0].full, Span::new(4, 8));
        assert_eq!(found[0].inner, Span::new(5, 7));
        assert_eq!(found[0].kind, DelimKind::Italic);
    }
}
