//! Image loader contract.
//!
//! Fetching remote image bytes is the embedder's job. The renderer only
//! requests a load and reacts to its completion; it never blocks on one.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for image loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{uri}': {message}")]
    LoadFailed { uri: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Completion callback for one fetch. Fired exactly once per request.
pub type FetchCallback = Box<dyn FnOnce(Result<Vec<u8>, ResourceError>) + Send>;

/// Asynchronous source of encoded image bytes.
///
/// Implementations may complete the callback synchronously (in-memory
/// stores) or from another thread/task (network fetchers); the render
/// driver handles both the same way.
pub trait ImageFetcher: Send + Sync + Debug {
    /// Request the bytes behind `uri` and hand them to `done` when
    /// available. Deduplication of concurrent requests for the same URI is
    /// the caller's responsibility, not the fetcher's.
    fn fetch(&self, uri: &str, done: FetchCallback);

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}
