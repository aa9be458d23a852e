/// A node of the inline tree produced for one line of text.
///
/// Bold nodes hold their own inline children; italic nodes are leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Undecorated text.
    Text(String),
    /// `**…**` with the inner text parsed again.
    Bold(Vec<InlineNode>),
    /// `*…*`, never reprocessed.
    Italic(String),
}

impl InlineNode {
    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(t) | InlineNode::Italic(t) => out.push_str(t),
            InlineNode::Bold(children) => {
                for c in children {
                    c.push_plain_text(out);
                }
            }
        }
    }
}

/// Plain text of a whole inline sequence.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for n in nodes {
        n.push_plain_text(&mut out);
    }
    out
}
