//! Final compositor: runs once after the walk, with the content height
//! known, to produce the surface the caller actually sees.

use crate::RenderError;
use crate::cache::ImageCache;
use crate::config::{Margins, RenderOptions};
use placard_traits::{PixelImage, Surface};
use placard_types::{Rect, VerticalAlign};

pub(crate) fn finalize<S: Surface>(
    surface: &mut S,
    content: &S,
    content_height: f32,
    opts: &RenderOptions,
    cache: &ImageCache<S::Image>,
    missing: &mut Vec<String>,
) -> Result<(), RenderError> {
    match opts.background_color {
        Some(color) => surface.fill_rect(Rect::from_size(surface.size()), color)?,
        None => surface.clear()?,
    }

    if let Some(uri) = &opts.background_image {
        if let Some(image) = cache.get(uri) {
            let fitted = image.size().aspect_fit(surface.size());
            let dest = Rect::new(
                (surface.width() - fitted.width) / 2.0,
                (surface.height() - fitted.height) / 2.0,
                fitted.width,
                fitted.height,
            );
            surface.draw_image(&image, dest)?;
        } else if !missing.iter().any(|m| m == uri) {
            missing.push(uri.clone());
        }
    }

    let offset = vertical_offset(
        opts.vertical_align,
        surface.height(),
        content_height,
        &opts.margin,
    );
    surface.composite(content, 0.0, offset)?;
    Ok(())
}

pub(crate) fn vertical_offset(
    align: VerticalAlign,
    surface_height: f32,
    content_height: f32,
    margin: &Margins,
) -> f32 {
    match align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Center => (surface_height - content_height) / 2.0 - margin.top / 2.0,
        VerticalAlign::Bottom => surface_height - content_height - margin.bottom,
    }
}
