//! Document fixtures built the way a markdown parser emits tokens.

use placard::{DocNode, HeadingLevel, NodeKind};

pub fn heading(level: HeadingLevel, text: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::HeadingOpen(level)),
        DocNode::text(text),
        DocNode::block(NodeKind::HeadingClose),
    ]
}

pub fn paragraph(text: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::Other("paragraph-open".to_string())),
        DocNode::text(text),
        DocNode::block(NodeKind::ParagraphClose),
    ]
}

/// A paragraph holding a single inline image.
pub fn image_paragraph(src: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::Other("paragraph-open".to_string())),
        DocNode::image(src, "fixture"),
        DocNode::block(NodeKind::ParagraphClose),
    ]
}

/// Concatenate token runs into one document.
pub fn document(blocks: Vec<Vec<DocNode>>) -> Vec<DocNode> {
    blocks.into_iter().flatten().collect()
}
