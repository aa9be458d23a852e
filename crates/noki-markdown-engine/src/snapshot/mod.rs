//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant
//! checks.
//!
//! - **`normalize`**: prints a node tree as stable indented text for `insta`
//!   inline snapshots
//! - **`invariants`**: panics when a rendered tree breaks a structural rule
//!   (header level range, emphasis overlap leftovers, misplaced line breaks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
