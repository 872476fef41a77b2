//! The layout-and-compositing engine.
//!
//! One render pass walks a parsed markdown tree and turns it into draw
//! calls on a caller-supplied surface: words wrap greedily, every visual
//! line is built in a scratch buffer first (its height is unknown until its
//! tallest element has been placed), blocks flow vertically, and a final
//! compositing step places the whole content band inside the output
//! surface. The pass is a pure function of (document, options, cache
//! state); images that miss the cache occupy no space and are reported back
//! so the driver can fetch them and render again.

use placard_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

pub mod cache;
pub mod config;
pub mod testing;

mod compositor;
mod decor;
mod engine;
mod images;
mod line;
mod state;
mod walker;

pub use self::cache::ImageCache;
pub use self::config::{Margins, RenderOptions};
pub use self::engine::{RenderReport, render_document};

#[cfg(test)]
mod render_test;
#[cfg(test)]
mod test_utils;
