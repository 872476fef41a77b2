//! Line compositor: two-pass per-line layout.
//!
//! Inline content is drawn into the line buffer at a fixed vertical origin
//! while the line's final height is still unknown — a late inline image may
//! be taller than all the text before it. Committing the line resolves the
//! height (the running max of everything placed), paints any blockquote
//! decoration underneath, and composites the buffer onto the content
//! surface at the correct vertical offset.

use crate::RenderError;
use crate::walker::Walker;
use placard_traits::{PixelImage, Surface};
use placard_types::{Rect, Size, TextAlign};

impl<'a, S: Surface> Walker<'a, S> {
    /// Place one word (with its trailing space, if any) on the current
    /// line, wrapping first when it would overflow the render width.
    pub(crate) fn place_word(&mut self, word: &str) -> Result<(), RenderError> {
        let font = self.font();
        let width = self.line.measure_text(word, &font)?;

        if self.state.cursor_x + width > self.render_width {
            self.commit_line()?;
        }

        let color = if self.state.in_heading {
            self.opts.header_color.or(self.opts.text_color)
        } else {
            self.opts.text_color
        };

        // Baseline sits one em below the buffer top.
        self.line
            .fill_text(word, self.state.cursor_x, font.size, &font, color)?;

        let text_height = self.state.text_line_height(self.opts.scale);
        self.state.register_height(text_height);
        self.state.cursor_x += width;
        self.state.line_extent = self.state.cursor_x;
        Ok(())
    }

    /// Place an inline image, shrunk to the configured max height while
    /// preserving aspect ratio. Wraps like a word when it would overflow.
    pub(crate) fn place_image(&mut self, image: &S::Image) -> Result<(), RenderError> {
        let natural = image.size();
        let max_height = self.opts.max_image_height * self.opts.scale;
        let scaled = if natural.height > max_height {
            natural.aspect_fit(Size::new(f32::INFINITY, max_height))
        } else {
            natural
        };

        if self.state.cursor_x + scaled.width > self.render_width {
            self.commit_line()?;
        }

        self.line.draw_image(
            image,
            Rect::new(self.state.cursor_x, 0.0, scaled.width, scaled.height),
        )?;

        self.state.register_height(scaled.height);
        self.state.cursor_x += scaled.width;
        self.state.line_extent = self.state.cursor_x;
        Ok(())
    }

    /// Finalize the current visual line: paint blockquote shading under it,
    /// composite the line buffer onto the content surface, and advance the
    /// vertical cursor by the line's resolved height.
    ///
    /// A line with pending height zero has had nothing placed on it and the
    /// commit is a no-op, so stray block boundaries never produce phantom
    /// empty lines.
    pub(crate) fn commit_line(&mut self) -> Result<(), RenderError> {
        let height = self.state.pending_line_height;
        if height <= 0.0 {
            return Ok(());
        }

        // Shading first, line content second: the band must sit underneath.
        if self.state.in_blockquote {
            self.draw_quote_band(height)?;
        }

        let dst_x = match self.opts.text_align {
            TextAlign::Left => self.opts.margin.left,
            TextAlign::Center => {
                self.opts.margin.left + (self.render_width - self.state.line_extent) / 2.0
            }
        };

        self.content
            .composite(&self.line, dst_x, self.state.cursor_y)?;
        self.line.clear()?;

        self.state.last_line_y = self.state.cursor_y;
        self.state.last_line_height = height;
        self.state.cursor_y += height;
        self.state.cursor_x = self.state.indent;
        self.state.pending_line_height = 0.0;
        self.state.line_extent = 0.0;
        Ok(())
    }
}
