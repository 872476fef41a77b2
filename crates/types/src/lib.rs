pub mod color;
pub mod geometry;
pub mod text;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use text::{FontSpec, FontWeight, TextAlign, VerticalAlign};
