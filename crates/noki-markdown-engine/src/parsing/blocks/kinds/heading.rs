use regex::Regex;
use std::sync::OnceLock;

/// ATX-style heading: a run of `#`, whitespace, then text on one line.
pub struct Heading;

impl Heading {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 6;

    fn pattern() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        // `$` without multi-line mode: the whole input must be a single line
        HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#+)[ \t]+(.+)$").expect("Invalid heading regex"))
    }

    /// Matches `text` (after trimming) as a heading, returning the clamped
    /// level and the heading text.
    ///
    /// Runs longer than six `#` are still headings, at level six.
    pub fn parse(text: &str) -> Option<(u8, &str)> {
        let caps = Self::pattern().captures(text.trim())?;
        let run = caps.get(1)?.as_str().len();
        let content = caps.get(2)?.as_str();
        Some((Self::clamp_level(run), content))
    }

    pub fn clamp_level(run: usize) -> u8 {
        run.clamp(Self::MIN_LEVEL as usize, Self::MAX_LEVEL as usize) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("### Three", Some((3, "Three")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("####### Too Deep", Some((6, "Too Deep")))]
    #[case("  ##   Padded  ", Some((2, "Padded")))]
    #[case("#\tTabbed", Some((1, "Tabbed")))]
    #[case("#hashtag", None)]
    #[case("#", None)]
    #[case("# ", None)]
    #[case("plain", None)]
    #[case("# Title\nmore", None)]
    fn heading_detection(#[case] input: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(input), expected);
    }

    #[test]
    fn clamp_never_leaves_range() {
        assert_eq!(Heading::clamp_level(0), 1);
        assert_eq!(Heading::clamp_level(4), 4);
        assert_eq!(Heading::clamp_level(40), 6);
    }
}
