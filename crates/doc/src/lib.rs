//! Document node model.
//!
//! This crate defines the in-memory representation of a parsed markdown
//! document as the renderer consumes it: an ordered tree of tokens the way
//! a markdown parser emits them (open/close pairs for containers, leaves
//! for text and images). Parsing itself happens outside this workspace;
//! callers hand the renderer a ready-made `DocNode` sequence.

pub type TextStr = String;

/// Heading depth, h1 through h5. Deeper headings map to the base size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
}

impl HeadingLevel {
    /// Multiplier applied to the base font size for this level.
    pub fn scale_factor(self) -> f32 {
        match self {
            HeadingLevel::H1 => 2.5,
            HeadingLevel::H2 => 2.0,
            HeadingLevel::H3 => 1.5,
            HeadingLevel::H4 => 1.25,
            HeadingLevel::H5 => 1.0,
        }
    }

    /// Parse a parser-emitted tag name ("h1".."h5").
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingLevel::H1),
            "h2" => Some(HeadingLevel::H2),
            "h3" => Some(HeadingLevel::H3),
            "h4" => Some(HeadingLevel::H4),
            "h5" => Some(HeadingLevel::H5),
            _ => None,
        }
    }
}

/// The closed set of node kinds the renderer dispatches on.
///
/// `Other` carries the raw token name of anything a newer parser emits that
/// the renderer does not know; such nodes draw nothing, but their
/// block-level flag is still honored so they terminate the current visual
/// line like any other block boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    HeadingOpen(HeadingLevel),
    HeadingClose,
    ParagraphClose,
    Rule,
    SoftBreak,
    HardBreak,
    StrongOpen,
    StrongClose,
    EmphasisOpen,
    EmphasisClose,
    ListItemOpen,
    ListItemClose,
    BlockquoteOpen,
    BlockquoteClose,
    Image,
    Text,
    Other(TextStr),
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Text
    }
}

impl NodeKind {
    /// A string identifier for the node kind, used in log messages.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::HeadingOpen(_) => "heading-open",
            NodeKind::HeadingClose => "heading-close",
            NodeKind::ParagraphClose => "paragraph-close",
            NodeKind::Rule => "rule",
            NodeKind::SoftBreak => "soft-break",
            NodeKind::HardBreak => "hard-break",
            NodeKind::StrongOpen => "strong-open",
            NodeKind::StrongClose => "strong-close",
            NodeKind::EmphasisOpen => "emphasis-open",
            NodeKind::EmphasisClose => "emphasis-close",
            NodeKind::ListItemOpen => "list-item-open",
            NodeKind::ListItemClose => "list-item-close",
            NodeKind::BlockquoteOpen => "blockquote-open",
            NodeKind::BlockquoteClose => "blockquote-close",
            NodeKind::Image => "image",
            NodeKind::Text => "text",
            NodeKind::Other(name) => name,
        }
    }
}

/// One node of the parsed document. Owned by the caller, read-only to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocNode {
    pub kind: NodeKind,
    /// Literal text for `Text` leaves, empty otherwise.
    pub content: TextStr,
    /// Ordered key/value pairs; images carry `src` and `alt` here.
    pub attributes: Vec<(TextStr, TextStr)>,
    pub children: Vec<DocNode>,
    /// Forces a line break before this node.
    pub block_level: bool,
}

impl DocNode {
    pub fn new(kind: NodeKind) -> Self {
        Self { kind, ..Default::default() }
    }

    pub fn block(kind: NodeKind) -> Self {
        Self { kind, block_level: true, ..Default::default() }
    }

    pub fn text(content: impl Into<TextStr>) -> Self {
        Self {
            kind: NodeKind::Text,
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn image(src: impl Into<TextStr>, alt: impl Into<TextStr>) -> Self {
        let alt = alt.into();
        Self {
            kind: NodeKind::Image,
            attributes: vec![
                ("src".to_string(), src.into()),
                ("alt".to_string(), alt.clone()),
            ],
            // Parsers emit the alt text again as a child text node.
            children: vec![DocNode::text(alt)],
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<DocNode>) -> Self {
        self.children = children;
        self
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// An image node with attributes is a leaf even when it has children:
    /// the single child is a redundant alt-text node the renderer must skip.
    pub fn is_image_leaf(&self) -> bool {
        self.kind == NodeKind::Image && !self.attributes.is_empty()
    }
}
