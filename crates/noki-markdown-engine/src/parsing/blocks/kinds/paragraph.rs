/// Paragraph block type (marker struct).
///
/// Paragraphs are the fallback when a block is neither a heading nor a list.
/// Each source line stays a line; the renderer separates them with explicit
/// breaks.
pub struct Paragraph;

impl Paragraph {
    /// Source lines of a paragraph block, without line terminators.
    pub fn lines(raw: &str) -> impl Iterator<Item = &str> {
        raw.split('\n').map(|l| l.trim_end_matches('\r'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_newlines() {
        let lines: Vec<_> = Paragraph::lines("one\ntwo\r\nthree").collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }
}
