use placard_types::{Color, TextAlign, VerticalAlign};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Per-side margins, already in output pixels (not multiplied by the render
/// scale). Deserializes from a bare number (uniform) or a per-side map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Uniform(f32),
            Sides {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        Ok(match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Uniform(v) => Margins::uniform(v),
            MarginsDef::Sides { top, right, bottom, left } => {
                Margins { top, right, bottom, left }
            }
        })
    }
}

/// Immutable configuration for one render call.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Whether a soft line break in the source forces a visual line break.
    pub use_breaks: bool,
    pub base_size: f32,
    pub font: String,
    pub scale: f32,
    pub margin: Margins,
    #[serde(deserialize_with = "lenient_color")]
    pub background_color: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub text_color: Option<Color>,
    #[serde(deserialize_with = "lenient_color")]
    pub header_color: Option<Color>,
    pub background_image: Option<String>,
    pub vertical_align: VerticalAlign,
    /// Local image key -> resolved URI.
    pub embedded_images: HashMap<String, String>,
    /// Inline images taller than this (times scale) shrink to fit.
    pub max_image_height: f32,
    pub text_align: TextAlign,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_breaks: true,
            base_size: 14.0,
            font: "serif".to_string(),
            scale: 1.0,
            margin: Margins::default(),
            background_color: None,
            text_color: None,
            header_color: None,
            background_image: None,
            vertical_align: VerticalAlign::Top,
            embedded_images: HashMap::new(),
            max_image_height: 512.0,
            text_align: TextAlign::Left,
        }
    }
}

/// An unset or malformed color is not an error; it falls back to the
/// surface's default drawing color.
fn lenient_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Valid(Color),
        Invalid(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Valid(color)) => Some(color),
        _ => None,
    })
}
