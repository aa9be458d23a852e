use regex::Regex;
use std::sync::OnceLock;

/// The marker a list entry was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// Literal numeral and period, e.g. `"12."`. Never renumbered.
    Ordered(String),
    /// `-` or `*`; both display the same glyph.
    Bullet,
}

impl ListMarker {
    pub const BULLET_GLYPH: &'static str = "•";

    /// Display form of the marker, with bullets normalized to [`Self::BULLET_GLYPH`].
    pub fn as_str(&self) -> &str {
        match self {
            ListMarker::Ordered(n) => n,
            ListMarker::Bullet => Self::BULLET_GLYPH,
        }
    }
}

/// Recognises list marker lines. Leading indentation is ignored.
pub struct ListLine;

impl ListLine {
    fn marker_pattern() -> &'static Regex {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        MARKER_REGEX
            .get_or_init(|| Regex::new(r"^(?:[0-9]+\.|[-*])\s").expect("Invalid list marker regex"))
    }

    fn ordered_pattern() -> &'static Regex {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        ORDERED_REGEX
            .get_or_init(|| Regex::new(r"^([0-9]+\.)\s(.+)").expect("Invalid ordered item regex"))
    }

    fn bullet_pattern() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| Regex::new(r"^[-*]\s(.+)").expect("Invalid bullet item regex"))
    }

    /// True if the line starts with a list marker followed by whitespace.
    ///
    /// Looser than [`Self::parse`]: `"1. "` is a marker line with no item text.
    pub fn is_marker_line(line: &str) -> bool {
        Self::marker_pattern().is_match(line.trim_start())
    }

    /// Splits a marker line into its marker and trimmed item text.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let line = line.trim_start();
        if let Some(caps) = Self::ordered_pattern().captures(line) {
            let marker = caps.get(1)?.as_str().to_string();
            let text = caps.get(2)?.as_str().trim();
            return Some((ListMarker::Ordered(marker), text));
        }
        let caps = Self::bullet_pattern().captures(line)?;
        Some((ListMarker::Bullet, caps.get(1)?.as_str().trim()))
    }
}
