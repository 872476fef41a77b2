//! Unified error type for the render pipeline.

use placard_engine::RenderError;
use placard_traits::SurfaceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
