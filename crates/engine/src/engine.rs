use crate::RenderError;
use crate::cache::ImageCache;
use crate::compositor;
use crate::config::RenderOptions;
use crate::walker::Walker;
use placard_doc::DocNode;
use placard_traits::Surface;

/// Outcome of one render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    /// Final vertical extent of the laid-out content, in pixels.
    pub content_height: f32,
    /// Resolved image URIs that missed the cache this pass, in first-seen
    /// order with no duplicates. Empty means the render is visually
    /// complete.
    pub missing_images: Vec<String>,
}

/// Render a document tree onto `surface`, overwriting its contents.
///
/// The pass is synchronous and pure with respect to (document, options,
/// cache state): rendering twice with the same inputs produces identical
/// surface contents. Images absent from the cache occupy no space and are
/// reported in the result; the caller is expected to load them and call
/// again.
pub fn render_document<S: Surface>(
    doc: &[DocNode],
    surface: &mut S,
    opts: &RenderOptions,
    cache: &ImageCache<S::Image>,
) -> Result<RenderReport, RenderError> {
    let content = surface.create_scratch(surface.width(), surface.height())?;
    let line = surface.create_scratch(surface.width(), surface.height())?;

    let mut walker = Walker::new(opts, cache, content, line, surface.width());
    for node in doc {
        walker.visit(node)?;
    }
    let (content, content_height, mut missing) = walker.finish()?;

    compositor::finalize(surface, &content, content_height, opts, cache, &mut missing)?;

    log::debug!(
        "rendered document: content height {:.1}, {} image(s) pending",
        content_height,
        missing.len()
    );

    Ok(RenderReport {
        content_height,
        missing_images: missing,
    })
}
