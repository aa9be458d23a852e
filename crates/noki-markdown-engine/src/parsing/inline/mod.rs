//! # Inline Parsing
//!
//! Turns one line of text into a tree of [`InlineNode`]s carrying bold and
//! italic emphasis.
//!
//! ## Pipeline
//!
//! 1. `Strong::find_all` collects `**…**` candidates
//! 2. `Emphasis::find_all` collects `*…*` candidates
//! 3. italic candidates intersecting any bold candidate are discarded
//! 4. survivors are merged by start offset and walked left to right
//!
//! Bold inner text goes through the whole pipeline again. Italic text is a
//! leaf. Anything that does not close degrades to plain text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Bold, Italic)
//! - **`kinds`**: delimiter-owning scanners (`Strong`, `Emphasis`)
//! - **`cursor`**: byte cursor used by the scanners
//! - **`parser`**: `parse_inline()` entry point and overlap resolution

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, plain_text};
