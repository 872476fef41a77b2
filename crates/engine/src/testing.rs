//! Recording surface for tests.
//!
//! `TestSurface` implements [`Surface`] by recording every draw call as a
//! comparable value instead of touching pixels, with deterministic text
//! metrics (every glyph advances half an em). Compositing folds the source
//! surface's recorded ops into the destination with the offset applied, so
//! asserting on a finished surface sees the fully flattened draw list.
//! Embedders can use it to test their own pipelines against the renderer.

use placard_traits::{PixelImage, Surface, SurfaceError};
use placard_types::{Color, FontSpec, FontWeight, Rect, Size};

/// Decoded image stand-in. `decode_image` parses byte payloads of the form
/// `b"img:WIDTHxHEIGHT"`.
#[derive(Debug, Clone, PartialEq)]
pub struct TestImage {
    pub width: f32,
    pub height: f32,
    pub tag: String,
}

impl TestImage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            tag: format!("img:{}x{}", width, height),
        }
    }
}

impl PixelImage for TestImage {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        italic: bool,
        color: Option<Color>,
    },
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Option<Color>,
    },
    Image {
        tag: String,
        dest: Rect,
    },
}

impl DrawOp {
    fn offset(&self, dx: f32, dy: f32) -> DrawOp {
        match self.clone() {
            DrawOp::Text { text, x, y, size, weight, italic, color } => DrawOp::Text {
                text,
                x: x + dx,
                y: y + dy,
                size,
                weight,
                italic,
                color,
            },
            DrawOp::Rect { rect, color } => DrawOp::Rect {
                rect: Rect::new(rect.x + dx, rect.y + dy, rect.width, rect.height),
                color,
            },
            DrawOp::Line { from, to, width, color } => DrawOp::Line {
                from: (from.0 + dx, from.1 + dy),
                to: (to.0 + dx, to.1 + dy),
                width,
                color,
            },
            DrawOp::Image { tag, dest } => DrawOp::Image {
                tag,
                dest: Rect::new(dest.x + dx, dest.y + dy, dest.width, dest.height),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestSurface {
    width: f32,
    height: f32,
    pub ops: Vec<DrawOp>,
}

impl TestSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// The recorded text ops, in draw order.
    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }

    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops.iter().find(|op| match op {
            DrawOp::Text { text, .. } => text.trim_end() == needle,
            _ => false,
        })
    }
}

impl Surface for TestSurface {
    type Image = TestImage;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn create_scratch(&self, width: f32, height: f32) -> Result<Self, SurfaceError> {
        Ok(TestSurface::new(width, height))
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Result<f32, SurfaceError> {
        Ok(text.chars().count() as f32 * font.size * 0.5)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: &FontSpec,
        color: Option<Color>,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size: font.size,
            weight: font.weight,
            italic: font.italic,
            color,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Rect { rect, color });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Option<Color>,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Line { from, to, width, color });
        Ok(())
    }

    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Image { tag: image.tag.clone(), dest });
        Ok(())
    }

    fn composite(&mut self, src: &Self, dst_x: f32, dst_y: f32) -> Result<(), SurfaceError> {
        for op in &src.ops {
            self.ops.push(op.offset(dst_x, dst_y));
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ops.clear();
        Ok(())
    }

    fn decode_image(&self, bytes: &[u8]) -> Result<Self::Image, SurfaceError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| SurfaceError::Decode(e.to_string()))?;
        let dims = text
            .strip_prefix("img:")
            .ok_or_else(|| SurfaceError::Decode(format!("unrecognized payload: {}", text)))?;
        let (w, h) = dims
            .split_once('x')
            .ok_or_else(|| SurfaceError::Decode("missing dimensions".to_string()))?;
        let width: f32 = w
            .parse()
            .map_err(|_| SurfaceError::Decode(format!("bad width: {}", w)))?;
        let height: f32 = h
            .parse()
            .map_err(|_| SurfaceError::Decode(format!("bad height: {}", h)))?;
        Ok(TestImage::new(width, height))
    }
}
