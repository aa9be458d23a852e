pub mod blocks;
pub mod inline;
pub mod nodes;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockClassifier, segment};

pub use nodes::{ListEntry, Node, ParagraphPart, build_nodes};

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
}

/// First stage: segments `text` into blocks and classifies each one.
pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = BlockClassifier;

    let blocks = segment(text)
        .into_iter()
        .enumerate()
        .map(|(index, span)| {
            let kind = classifier.classify(span.slice(text));
            log::trace!("block {index} at {}..{} is {}", span.start, span.end, kind.name());
            Block { span, kind }
        })
        .collect();

    ParsedDoc { blocks }
}
