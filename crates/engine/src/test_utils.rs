use crate::cache::ImageCache;
use crate::config::RenderOptions;
use crate::engine::{RenderReport, render_document};
use crate::testing::{TestImage, TestSurface};
use placard_doc::{DocNode, HeadingLevel, NodeKind};

/// Token sequence for a heading block, the way a parser emits it.
pub fn heading(level: HeadingLevel, text: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::HeadingOpen(level)),
        DocNode::text(text),
        DocNode::block(NodeKind::HeadingClose),
    ]
}

/// Token sequence for a paragraph. The opening token is one the renderer
/// does not dispatch on, but its block flag still breaks the line.
pub fn paragraph(text: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::Other("paragraph-open".to_string())),
        DocNode::text(text),
        DocNode::block(NodeKind::ParagraphClose),
    ]
}

pub fn blockquote(text: &str) -> Vec<DocNode> {
    vec![
        DocNode::block(NodeKind::BlockquoteOpen),
        DocNode::text(text),
        DocNode::block(NodeKind::BlockquoteClose),
    ]
}

pub fn render(doc: &[DocNode], opts: &RenderOptions) -> (TestSurface, RenderReport) {
    let cache = ImageCache::new();
    render_with_cache(doc, opts, &cache)
}

pub fn render_with_cache(
    doc: &[DocNode],
    opts: &RenderOptions,
    cache: &ImageCache<TestImage>,
) -> (TestSurface, RenderReport) {
    let mut surface = TestSurface::new(400.0, 200.0);
    let report = render_document(doc, &mut surface, opts, cache).expect("render failed");
    (surface, report)
}
