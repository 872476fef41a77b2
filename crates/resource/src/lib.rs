//! Image fetcher implementations for the Placard render pipeline.
//!
//! This crate provides embedder-side implementations of the `ImageFetcher`
//! trait from placard-traits.
//!
//! ## Available Fetchers
//!
//! - [`InMemoryImageFetcher`]: serves pre-populated byte buffers
//! - [`DataUriFetcher`]: decodes `data:` URIs locally, delegates the rest

mod data_uri;
mod memory;

pub use data_uri::{DataUriFetcher, decode_data_uri};
pub use memory::InMemoryImageFetcher;
