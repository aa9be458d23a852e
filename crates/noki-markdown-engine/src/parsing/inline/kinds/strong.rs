use crate::parsing::{inline::cursor::Cursor, span::Span};

use super::{DelimKind, Delimited};

/// Bold emphasis: `**text**`.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    const NEWLINE: u8 = b'\n';

    /// Collects every bold candidate in `s`, scanning left to right.
    ///
    /// Candidates never overlap each other: scanning resumes after the
    /// closing delimiter of the previous match.
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

    /// Attempts to match `**…**` at the cursor, closing at the first `**`
    /// after at least one content byte. Content may not cross a newline.
    ///
    /// On failure the cursor is restored.
    pub fn try_parse(cur: &mut Cursor<'_>) -> Option<Delimited> {
        if !cur.starts_with(Self::DELIM) {
            return None;
        }

        let saved = cur.clone();
        let start = cur.pos();
        cur.bump_n(Self::DELIM.len());
        let inner_start = cur.pos();

        // at least one content byte, even if it is a `*`
        match cur.bump() {
            None | Some(Self::NEWLINE) => {
                *cur = saved;
                return None;
            }
            Some(_) => {}
        }

        while !cur.eof() && !cur.starts_with(Self::DELIM) {
            if cur.peek() == Some(Self::NEWLINE) {
                *cur = saved;
                return None;
            }
            cur.bump();
        }

        if !cur.starts_with(Self::DELIM) {
            *cur = saved;
            return None;
        }
        let inner_end = cur.pos();
        cur.bump_n(Self::DELIM.len());

        Some(Delimited {
            kind: DelimKind::Bold,
            full: Span::new(start, cur.pos()),
            inner: Span::new(inner_start, inner_end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_simple_bold() {
        let found = Strong::find_all("a **b** c");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full, Span::new(2, 7));
        assert_eq!(found[0].inner, Span::new(4, 5));
    }

    #[test]
    fn non_greedy_closes_at_first_delimiter() {
        let found = Strong::find_all("**a** and **b**");
        let inners: Vec<_> = found
            .iter()
            .map(|d| d.inner.slice("**a** and **b**"))
            .collect();
        assert_eq!(inners, vec!["a", "b"]);
    }

    #[test]
    fn single_stars_stay_inside() {
        let s = "**outer *not-italic* still bold**";
        let found = Strong::find_all(s);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full, Span::new(0, s.len()));
        assert_eq!(found[0].inner.slice(s), "outer *not-italic* still bold");
    }

    #[test]
    fn empty_content_is_not_bold() {
        assert!(Strong::find_all("****").is_empty());
    }

    #[test]
    fn unclosed_is_not_bold() {
        assert!(Strong::find_all("**never closed").is_empty());
    }

    #[test]
    fn newline_breaks_bold() {
        assert!(Strong::find_all("**split\nacross**").is_empty());
    }

    #[test]
    fn failed_opener_restores_cursor() {
        let mut cur = Cursor::new("**open");
        assert!(Strong::try_parse(&mut cur).is_none());
        assert_eq!(cur.pos(), 0);
    }
}
