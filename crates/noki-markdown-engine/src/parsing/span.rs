/// A byte range `[start, end)` into the text being parsed.
///
/// Spans are only meaningful against the string they were produced from and
/// never outlive a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if the two spans share at least one byte.
    ///
    /// Touching spans (`a.end == b.start`) do not intersect.
    #[must_use]
    pub fn intersects(self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slices `s` with this span.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(2, 7).len(), 5);
        assert!(Span::new(3, 3).is_empty());
        assert!(Span::new(5, 3).is_empty());
    }

    #[test]
    fn intersects_partial_and_full() {
        let outer = Span::new(0, 10);
        assert!(outer.intersects(Span::new(2, 4)));
        assert!(outer.intersects(Span::new(8, 12)));
        assert!(Span::new(8, 12).intersects(outer));
    }

    #[test]
    fn touching_spans_do_not_intersect() {
        assert!(!Span::new(0, 8).intersects(Span::new(8, 12)));
        assert!(!Span::new(8, 12).intersects(Span::new(0, 8)));
    }

    #[test]
    fn slice_returns_covered_text() {
        assert_eq!(Span::new(2, 6).slice("**bold**"), "bold");
    }
}
