pub mod loader;
pub mod surface;

pub use loader::{FetchCallback, ImageFetcher, ResourceError};
pub use surface::{PixelImage, Surface, SurfaceError};
