//! Pipeline tests for the parsing module.
//!
//! Each case runs both stages, checks the tree invariants, and compares the
//! normalized tree against an inline snapshot.

use insta::assert_snapshot;

use crate::{
    parsing::{blocks::BlockKind, build_nodes, parse_document},
    snapshot,
};

fn pipeline(md: &str) -> String {
    let doc = parse_document(md);
    let nodes = build_nodes(&doc.blocks);
    snapshot::invariants(&nodes);
    snapshot::normalize(&nodes)
}

// Snapshot tests

#[test]
fn study_plan_message() {
    let md = "## Study plan\n\nHere is your week:\n\n1. **Monday**: revise *limits*\n2. Tuesday: past paper\n   timed, 90 minutes\n\nGood luck!\nAsk me anything.";
    assert_snapshot!(pipeline(md), @r#"
    Header(2)
      Text "Study plan"
    Paragraph
      Line
        Text "Here is your week:"
    List
      Item "1."
        Bold
          Text "Monday"
        Text ": revise "
        Italic "limits"
      Item "2."
        Text "Tuesday: past paper timed, 90 minutes"
    Paragraph
      Line
        Text "Good luck!"
      Break
      Line
        Text "Ask me anything."
    "#);
}

#[test]
fn heading_inside_paragraph() {
    assert_snapshot!(pipeline("Summary\n### Details\nmore *here*"), @r#"
    Paragraph
      Line
        Text "Summary"
      Header(3)
        Text "Details"
      Line
        Text "more "
        Italic "here"
    "#);
}

#[test]
fn mixed_bullets_share_one_glyph() {
    assert_snapshot!(pipeline("- dash\n* star"), @r#"
    List
      Item "•"
        Text "dash"
      Item "•"
        Text "star"
    "#);
}

#[test]
fn clamped_heading_with_bold() {
    assert_snapshot!(pipeline("########## **Deep** end"), @r#"
    Header(6)
      Bold
        Text "Deep"
      Text " end"
    "#);
}

// Block-level tests

/// Blocks keep source order and their spans do not overlap.
#[test]
fn block_spans_are_ordered() {
    let md = "# a\n\nb\n\n\n- c";
    let doc = parse_document(md);
    assert_eq!(doc.blocks.len(), 3);
    for pair in doc.blocks.windows(2) {
        assert!(pair[0].span.end <= pair[1].span.start);
    }
    let kinds: Vec<_> = doc.blocks.iter().map(|b| b.kind.name()).collect();
    assert_eq!(kinds, vec!["Header", "Paragraph", "List"]);
}

/// Block spans slice back to the raw block text.
#[test]
fn block_spans_slice_source() {
    let md = "first\n\nsecond block\nline two";
    let doc = parse_document(md);
    let raws: Vec<_> = doc.blocks.iter().map(|b| b.span.slice(md)).collect();
    assert_eq!(raws, vec!["first", "second block\nline two"]);
}

#[test]
fn header_level_is_clamped_at_block_stage() {
    let doc = parse_document("####### Too Deep");
    assert!(matches!(
        &doc.blocks[0].kind,
        BlockKind::Header { level: 6, text } if text == "Too Deep"
    ));
}

#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n\n\n").blocks.is_empty());
}
