//! # Inline Kinds
//!
//! Emphasis types that own their delimiters and know how to recognise a
//! candidate run at the cursor.
//!
//! - **`Strong`**: `DELIM = b"**"`, non-greedy, may contain single `*`
//! - **`Emphasis`**: `STAR = b'*'`, only lone stars open and close, no `*` inside
//!
//! Candidates are provisional. Whether one survives is decided by the parser
//! once every candidate in the text is known.

pub mod emphasis;
pub mod strong;

pub use emphasis::Emphasis;
pub use strong::Strong;

use crate::parsing::span::Span;

/// Which emphasis a delimited run carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimKind {
    Bold,
    Italic,
}

/// A provisional emphasis run found by one of the scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    pub kind: DelimKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Span between the delimiters.
    pub inner: Span,
}
