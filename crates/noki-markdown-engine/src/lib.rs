//! # noki-markdown-engine
//!
//! Renders the small Markdown dialect used in Noki's chat panels and
//! dashboards: headers, ordered and bulleted lists, paragraphs with line
//! breaks, and `**bold**` / `*italic*` emphasis. No external Markdown parser
//! is involved.
//!
//! ## Pipeline
//!
//! ```text
//! text → segment → classify → Vec<Block> → parse_inline → Vec<Node>
//!        (blocks)  (blocks)                (inline)
//! ```
//!
//! The result can be consumed directly or turned into HTML or plain text
//! through the [`output`] module.
//!
//! ## Quick Start
//!
//! ```
//! use noki_markdown_engine::{InlineNode, Node, render};
//!
//! let nodes = render(Some("# Title"));
//! assert_eq!(
//!     nodes,
//!     vec![Node::Header {
//!         level: 1,
//!         content: vec![InlineNode::Text("Title".to_string())],
//!     }]
//! );
//!
//! assert!(render(None).is_empty());
//! ```
//!
//! Rendering never fails. Syntax that does not match a recognised form is
//! kept as plain text.

pub mod output;
pub mod parsing;
pub mod snapshot;

pub use output::{RenderOptions, html::to_html, plain::to_plain_text};
pub use parsing::{ListEntry, Node, ParagraphPart, blocks::ListMarker, inline::InlineNode};

/// Renders `text` into an ordered sequence of block nodes.
///
/// `None` and the empty string both produce an empty sequence. The function
/// is pure: identical input always yields an identical tree.
pub fn render(text: Option<&str>) -> Vec<Node> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return vec![];
    };

    let doc = parsing::parse_document(text);
    let nodes = parsing::build_nodes(&doc.blocks);
    log::debug!("rendered {} bytes into {} blocks", text.len(), nodes.len());
    nodes
}
