//! Block decorators: blockquote shading, horizontal rules, list bullets.

use crate::RenderError;
use crate::walker::{LIST_INDENT_STEP, RULE_GAP, Walker};
use placard_traits::Surface;
use placard_types::{Color, Rect};

const BULLET: &str = "\u{2022}";
const QUOTE_BAR_WIDTH: f32 = 4.0;

impl<'a, S: Surface> Walker<'a, S> {
    /// Translucent band across the quoted line's slot plus a darker bar at
    /// its left edge, both sized to the line's resolved height. Drawn on
    /// the content surface before the line buffer composites on top.
    pub(crate) fn draw_quote_band(&mut self, line_height: f32) -> Result<(), RenderError> {
        let x = self.opts.margin.left + self.state.indent;
        let width = (self.render_width - self.state.indent).max(0.0);
        let y = self.state.cursor_y;

        self.content.fill_rect(
            Rect::new(x, y, width, line_height),
            Color::gray(128).with_alpha(0.18),
        )?;
        self.content.fill_rect(
            Rect::new(x, y, QUOTE_BAR_WIDTH * self.opts.scale, line_height),
            Color::gray(96).with_alpha(0.85),
        )?;
        Ok(())
    }

    /// Stroke a horizontal rule across the render width, vertically centered
    /// in the rule's own gap (the preceding line was already committed).
    pub(crate) fn draw_rule(&mut self) -> Result<(), RenderError> {
        let gap = RULE_GAP * self.opts.scale;
        let y = self.state.cursor_y + gap / 2.0;
        let left = self.opts.margin.left;

        self.content.stroke_line(
            (left, y),
            (left + self.render_width, y),
            self.opts.scale,
            self.opts.text_color,
        )?;
        self.state.register_height(gap);
        Ok(())
    }

    /// Draw the bullet glyph at the item's leading edge, then indent the
    /// item's content one step past it.
    pub(crate) fn open_list_item(&mut self) -> Result<(), RenderError> {
        let font = self.font();
        self.line.fill_text(
            BULLET,
            self.state.cursor_x,
            font.size,
            &font,
            self.opts.text_color,
        )?;
        let text_height = self.state.text_line_height(self.opts.scale);
        self.state.register_height(text_height);

        self.state.push_indent(LIST_INDENT_STEP * self.opts.scale);
        self.state.cursor_x = self.state.indent;
        self.state.line_extent = self.state.cursor_x;
        Ok(())
    }
}
