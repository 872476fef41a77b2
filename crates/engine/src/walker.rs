use crate::RenderError;
use crate::cache::ImageCache;
use crate::config::RenderOptions;
use crate::state::RenderState;
use placard_doc::{DocNode, NodeKind};
use placard_traits::Surface;
use placard_types::{FontSpec, FontWeight};
use std::sync::Arc;

/// Trailing gap below a heading, in unscaled pixels.
pub(crate) const HEADING_GAP: f32 = 12.0;
/// Trailing gap below a paragraph.
pub(crate) const PARAGRAPH_GAP: f32 = 8.0;
/// Vertical room a horizontal rule occupies.
pub(crate) const RULE_GAP: f32 = 8.0;
/// Indent added for each nested list level.
pub(crate) const LIST_INDENT_STEP: f32 = 20.0;

/// One render pass's walker: visits document nodes in order, mutating the
/// render state and issuing draw calls to the line buffer and content
/// surface. The line compositor (line.rs), block decorators (decor.rs),
/// and image resolution (images.rs) are further impl blocks on this type.
pub(crate) struct Walker<'a, S: Surface> {
    pub(crate) opts: &'a RenderOptions,
    pub(crate) cache: &'a ImageCache<S::Image>,
    pub(crate) state: RenderState,
    /// Accumulates committed lines; composited onto the output last.
    pub(crate) content: S,
    /// Scratch surface for the line being built, cleared after each commit.
    pub(crate) line: S,
    /// Usable width between the horizontal margins.
    pub(crate) render_width: f32,
    /// URIs that missed the cache this pass, deduplicated in order.
    pub(crate) missing: Vec<String>,
    font_family: Arc<str>,
}

impl<'a, S: Surface> Walker<'a, S> {
    pub fn new(
        opts: &'a RenderOptions,
        cache: &'a ImageCache<S::Image>,
        content: S,
        line: S,
        surface_width: f32,
    ) -> Self {
        let render_width = (surface_width - opts.margin.left - opts.margin.right).max(0.0);
        Self {
            font_family: Arc::from(opts.font.as_str()),
            state: RenderState::new(opts.base_size),
            opts,
            cache,
            content,
            line,
            render_width,
            missing: Vec::new(),
        }
    }

    /// The font for the current state, with the render scale applied.
    pub(crate) fn font(&self) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            size: self.state.size * self.opts.scale,
            weight: self.state.weight,
            italic: self.state.italic,
        }
    }

    pub(crate) fn visit(&mut self, node: &DocNode) -> Result<(), RenderError> {
        // Container nodes draw nothing themselves. Image nodes are leaves
        // even with a child: the child repeats the alt text.
        if !node.children.is_empty() && !node.is_image_leaf() {
            for child in &node.children {
                self.visit(child)?;
            }
            return Ok(());
        }

        if node.block_level {
            self.commit_line()?;
        }

        match &node.kind {
            NodeKind::HeadingOpen(level) => {
                self.state.in_heading = true;
                self.state.weight = FontWeight::Bold;
                self.state.size = (self.opts.base_size * level.scale_factor()).round();
            }
            NodeKind::HeadingClose => {
                self.state.size = self.opts.base_size;
                self.state.weight = FontWeight::Normal;
                self.state.in_heading = false;
                self.state.register_height(HEADING_GAP * self.opts.scale);
            }
            NodeKind::ParagraphClose => {
                self.state.register_height(PARAGRAPH_GAP * self.opts.scale);
            }
            NodeKind::Rule => self.draw_rule()?,
            NodeKind::SoftBreak => {
                if self.opts.use_breaks {
                    self.commit_line()?;
                }
            }
            NodeKind::HardBreak => self.commit_line()?,
            NodeKind::StrongOpen => self.state.weight = FontWeight::Bold,
            NodeKind::StrongClose => self.state.weight = FontWeight::Normal,
            NodeKind::EmphasisOpen => self.state.italic = true,
            NodeKind::EmphasisClose => self.state.italic = false,
            NodeKind::ListItemOpen => self.open_list_item()?,
            NodeKind::ListItemClose => {
                // Commit before unindenting so a close arriving mid-line
                // cannot snap the cursor left over placed content.
                self.commit_line()?;
                self.state.pop_indent();
                self.state.cursor_x = self.state.indent;
            }
            NodeKind::BlockquoteOpen => {
                self.commit_line()?;
                self.state.in_blockquote = true;
            }
            NodeKind::BlockquoteClose => {
                // Commit while the flag is still set so the quoted line
                // gets its shading, then leave the quote.
                self.commit_line()?;
                self.state.in_blockquote = false;
            }
            NodeKind::Image => {
                if let Some(src) = node.attr("src") {
                    // Unresolvable images occupy no space; a later
                    // re-render picks them up once loaded.
                    if let Some(image) = self.resolve_image(src) {
                        self.place_image(&image)?;
                    }
                }
            }
            NodeKind::Text => self.visit_text(node)?,
            NodeKind::Other(name) => {
                log::trace!("ignoring unknown node kind '{}'", name);
            }
        }
        Ok(())
    }

    fn visit_text(&mut self, node: &DocNode) -> Result<(), RenderError> {
        let content = node.content.as_str();
        if is_comment(content) {
            return Ok(());
        }
        if let Some(src) = inline_image_shorthand(content) {
            let src = src.to_string();
            if let Some(image) = self.resolve_image(&src) {
                self.place_image(&image)?;
            }
            return Ok(());
        }
        if content.trim().is_empty() {
            return Ok(());
        }

        let words: Vec<&str> = content.split(' ').collect();
        let last = words.len() - 1;
        for (i, word) in words.iter().enumerate() {
            if i < last {
                // Every non-final word regains the space the split removed.
                let mut spaced = String::with_capacity(word.len() + 1);
                spaced.push_str(word);
                spaced.push(' ');
                self.place_word(&spaced)?;
            } else {
                self.place_word(word)?;
            }
        }
        Ok(())
    }

    /// Consume the walker, flushing any trailing line. Returns the content
    /// surface, the final content height, and the cache misses of the pass.
    pub fn finish(mut self) -> Result<(S, f32, Vec<String>), RenderError> {
        self.commit_line()?;
        Ok((self.content, self.state.cursor_y, self.missing))
    }
}

/// HTML comments and markdown reference-comments produce no output.
pub(crate) fn is_comment(text: &str) -> bool {
    let t = text.trim_start();
    t.starts_with("<!--") || t.starts_with("[//]:") || t.starts_with("[comment]:")
}

/// Parsers leave `![](src)` (an inline image with no alt text) in the text
/// stream; treat it as an image node.
pub(crate) fn inline_image_shorthand(text: &str) -> Option<&str> {
    let src = text.trim().strip_prefix("![](")?.strip_suffix(')')?;
    if src.is_empty() || src.contains(' ') {
        return None;
    }
    Some(src)
}
