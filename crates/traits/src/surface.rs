//! Surface abstraction the renderer draws through.
//!
//! The renderer never touches pixels, glyphs, or codecs itself; it issues
//! draw calls against this trait and lets the backend (an HTML canvas
//! binding, a software rasterizer, a recording surface in tests) do the
//! work. Text metrics therefore belong entirely to the backend: the same
//! document can wrap differently on two surfaces with different fonts, and
//! that is by contract.

use placard_types::{Color, FontSpec, Rect, Size};
use thiserror::Error;

/// Error type for surface backends.
///
/// These are the only errors the renderer propagates: a failing backend
/// aborts the render, while malformed input (bad colors, missing images)
/// degrades silently long before reaching the surface.
#[derive(Error, Debug, Clone)]
pub enum SurfaceError {
    #[error("surface backend error: {0}")]
    Backend(String),

    #[error("failed to allocate a {width}x{height} scratch surface: {message}")]
    ScratchAllocation {
        width: f32,
        height: f32,
        message: String,
    },

    #[error("failed to decode image data: {0}")]
    Decode(String),
}

/// A decoded image handle owned by a surface backend.
pub trait PixelImage: Clone {
    fn size(&self) -> Size;
}

/// A drawing target of fixed pixel dimensions.
///
/// The trait is `Sized` and scratch surfaces are `Self`, so a backend
/// composites its own buffers without downcasting. A `None` color on text
/// and stroke calls means "use the backend's default drawing color"; the
/// renderer passes `None` whenever the configuration left a color unset or
/// invalid.
pub trait Surface: Sized {
    type Image: PixelImage;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Allocate an off-screen surface of the same backend type, fully
    /// transparent.
    fn create_scratch(&self, width: f32, height: f32) -> Result<Self, SurfaceError>;

    /// Advance width of `text` in the given font, in pixels.
    fn measure_text(&self, text: &str, font: &FontSpec) -> Result<f32, SurfaceError>;

    /// Draw `text` with its baseline at `y`.
    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Option<Color>,
    ) -> Result<(), SurfaceError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Option<Color>,
    ) -> Result<(), SurfaceError>;

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<(), SurfaceError>;

    /// Alpha-composite another surface of the same type onto this one with
    /// its top-left corner at `(dst_x, dst_y)`.
    fn composite(&mut self, src: &Self, dst_x: f32, dst_y: f32) -> Result<(), SurfaceError>;

    /// Reset to fully transparent.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Decode encoded image bytes into a backend handle.
    fn decode_image(&self, bytes: &[u8]) -> Result<Self::Image, SurfaceError>;
}
