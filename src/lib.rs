//! Placard renders parsed markdown onto a raster surface.
//!
//! The pipeline is split across a small workspace:
//!
//! - `placard-doc`: the parsed document tree (flat token-style nodes).
//! - `placard-types`: colors, geometry, and font primitives.
//! - `placard-traits`: the [`Surface`] drawing contract and the
//!   [`ImageFetcher`] loading contract.
//! - `placard-engine`: the synchronous layout-and-compositing pass.
//! - `placard-resource`: fetcher implementations (in-memory, data URIs).
//!
//! This crate ties them together: [`Renderer`] drives render passes against
//! a shared [`ImageCache`], fetching missed images and re-rendering until
//! the output settles.
//!
//! ```no_run
//! # use placard::{Renderer, RenderOptions, InMemoryImageFetcher};
//! # use placard_doc::DocNode;
//! # use std::sync::Arc;
//! # async fn example<S: placard::Surface>(doc: Vec<DocNode>, mut surface: S) {
//! let fetcher = Arc::new(InMemoryImageFetcher::new());
//! let mut renderer: Renderer<S> = Renderer::new(fetcher);
//! let opts = RenderOptions::default();
//! let report = renderer.render_settled(&doc, &mut surface, &opts).await.unwrap();
//! assert!(report.missing_images.is_empty());
//! # }
//! ```

mod driver;
mod error;

pub use driver::{RenderOutcome, Renderer};
pub use error::PipelineError;

pub use placard_doc::{DocNode, HeadingLevel, NodeKind};
pub use placard_engine::{ImageCache, Margins, RenderOptions, RenderReport, render_document};
pub use placard_resource::{DataUriFetcher, InMemoryImageFetcher};
pub use placard_traits::{
    FetchCallback, ImageFetcher, PixelImage, ResourceError, Surface, SurfaceError,
};
pub use placard_types::{Color, FontSpec, FontWeight, Rect, Size, TextAlign, VerticalAlign};

/// Parse render options from a JSON document.
///
/// Unknown fields are ignored and malformed colors fall back to the
/// surface defaults, so an options blob from an untrusted source cannot
/// fail the render over a cosmetic field. Structural errors (not an
/// object, wrong types for numeric fields) are still reported.
pub fn options_from_json(json: &str) -> Result<RenderOptions, PipelineError> {
    Ok(serde_json::from_str(json)?)
}
