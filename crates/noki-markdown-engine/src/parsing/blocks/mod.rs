//! # Block Parsing
//!
//! First stage of the pipeline: the document is cut into raw blocks and each
//! block is classified into a tagged [`BlockKind`].
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): split on runs of two or more newlines,
//!    dropping blocks that are blank after trimming
//! 2. **Classification** (`classify`): `BlockClassifier` tests header, then
//!    list, then falls back to paragraph
//! 3. **List construction** (`builder`): `ListBuilder` folds continuation
//!    lines into the current item
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `ListItem`, `ParagraphLine`
//! - **`kinds`**: pattern owners (`Heading`, `ListLine`, `Paragraph`)
//! - **`segment`**: blank-line segmentation
//! - **`classify`**: `BlockClassifier`
//! - **`builder`**: `ListBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks keep source order and their spans never overlap
//! - Header levels are always within 1..=6
//! - No text is parsed inline here; that is the second stage's job

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::ListBuilder;
pub use classify::BlockClassifier;
pub use kinds::ListMarker;
pub use segment::segment;
pub use types::{Block, BlockKind, ListItem, ParagraphLine};
