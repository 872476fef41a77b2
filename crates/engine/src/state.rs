use placard_types::FontWeight;

/// Mutable working memory of one render pass, owned by the tree walker.
///
/// Invariants: `cursor_x` is reset to the current indent at the start of
/// every visual line, and `cursor_y` never decreases within one pass.
#[derive(Debug, Clone)]
pub(crate) struct RenderState {
    /// Current font size in unscaled units (base size or a heading size).
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
    pub cursor_x: f32,
    pub cursor_y: f32,
    /// Current left indent; accumulates with nested lists.
    pub indent: f32,
    /// Saved indents for nested list items. Flat restore would break lists
    /// nested more than one level deep, so each open pushes and each close
    /// pops.
    indent_stack: Vec<f32>,
    pub in_blockquote: bool,
    pub in_heading: bool,
    /// Vertical position of the last committed line.
    pub last_line_y: f32,
    pub last_line_height: f32,
    /// Tallest element placed on the line currently being built. Zero means
    /// the line is empty and a commit is a no-op.
    pub pending_line_height: f32,
    /// Rightmost x reached by the current line's content, for centering.
    pub line_extent: f32,
}

impl RenderState {
    pub fn new(base_size: f32) -> Self {
        Self {
            size: base_size,
            weight: FontWeight::Normal,
            italic: false,
            cursor_x: 0.0,
            cursor_y: 0.0,
            indent: 0.0,
            indent_stack: Vec::new(),
            in_blockquote: false,
            in_heading: false,
            last_line_y: 0.0,
            last_line_height: 0.0,
            pending_line_height: 0.0,
            line_extent: 0.0,
        }
    }

    /// Height a text run at the current size contributes to its line.
    pub fn text_line_height(&self, scale: f32) -> f32 {
        self.size * scale
    }

    /// Fold a height candidate (text, image, or trailing block gap) into
    /// the pending line height. A smaller candidate never shrinks the line.
    pub fn register_height(&mut self, height: f32) {
        self.pending_line_height = self.pending_line_height.max(height);
    }

    pub fn push_indent(&mut self, step: f32) {
        self.indent_stack.push(self.indent);
        self.indent += step;
    }

    pub fn pop_indent(&mut self) {
        self.indent = self.indent_stack.pop().unwrap_or(0.0);
    }
}
