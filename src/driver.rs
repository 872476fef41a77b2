//! Load-and-re-render driver.
//!
//! A render pass is synchronous and never waits for the network: images
//! that miss the cache occupy no space and come back in the report. This
//! driver owns the loop around that contract. It schedules one fetch per
//! missing URI, decodes completed bytes through the target surface, fills
//! the shared cache, and renders the document again until the output is
//! visually complete or nothing more can load.
//!
//! Each pass carries a generation number. A completion tagged with an older
//! generation still populates the cache (the bytes are valid for any later
//! pass over the same URI) but is logged as stale rather than treated as
//! progress for the pass that is currently settling.

use crate::error::PipelineError;
use placard_doc::DocNode;
use placard_engine::{ImageCache, RenderOptions, RenderReport, render_document};
use placard_traits::{ImageFetcher, ResourceError, Surface};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One finished fetch, tagged with the pass that requested it.
struct LoadComplete {
    generation: u64,
    uri: String,
    result: Result<Vec<u8>, ResourceError>,
}

/// Outcome of a single driven pass.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub content_height: f32,
    /// URIs still absent from the cache after this pass.
    pub missing_images: Vec<String>,
    /// Fetches scheduled by this pass. Zero with a non-empty missing list
    /// means every remaining URI is already in flight or permanently
    /// failed.
    pub requested: usize,
}

impl RenderOutcome {
    pub fn is_complete(&self) -> bool {
        self.missing_images.is_empty()
    }
}

/// Owns the cache, the fetcher, and the completion channel for one
/// document surface.
pub struct Renderer<S: Surface> {
    cache: Arc<ImageCache<S::Image>>,
    fetcher: Arc<dyn ImageFetcher>,
    generation: u64,
    tx: mpsc::UnboundedSender<LoadComplete>,
    rx: mpsc::UnboundedReceiver<LoadComplete>,
}

impl<S: Surface> Renderer<S> {
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self::with_cache(fetcher, Arc::new(ImageCache::new()))
    }

    /// Reuse a caller-owned cache, typically shared across documents so
    /// repeated sources decode once.
    pub fn with_cache(fetcher: Arc<dyn ImageFetcher>, cache: Arc<ImageCache<S::Image>>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            cache,
            fetcher,
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn cache(&self) -> &Arc<ImageCache<S::Image>> {
        &self.cache
    }

    /// Render once with the cache as it stands and schedule fetches for
    /// whatever missed. Never blocks on a load.
    pub fn render_once(
        &mut self,
        doc: &[DocNode],
        surface: &mut S,
        opts: &RenderOptions,
    ) -> Result<RenderOutcome, PipelineError> {
        self.generation += 1;
        let report = render_document(doc, surface, opts, &self.cache)?;

        let mut requested = 0;
        for uri in &report.missing_images {
            if !self.cache.begin_load(uri) {
                continue;
            }
            requested += 1;
            log::debug!("requesting '{}' via {}", uri, self.fetcher.name());
            let tx = self.tx.clone();
            let generation = self.generation;
            let completed_uri = uri.clone();
            self.fetcher.fetch(
                uri,
                Box::new(move |result| {
                    // The driver may already be gone; a dropped completion
                    // is fine.
                    let _ = tx.send(LoadComplete {
                        generation,
                        uri: completed_uri,
                        result,
                    });
                }),
            );
        }

        Ok(RenderOutcome {
            content_height: report.content_height,
            missing_images: report.missing_images,
            requested,
        })
    }

    /// Render repeatedly until every resolvable image is in the cache.
    ///
    /// Terminates when a pass comes back complete, or when nothing is left
    /// in flight (remaining misses are permanently failed sources, which
    /// degrade to occupying no space).
    pub async fn render_settled(
        &mut self,
        doc: &[DocNode],
        surface: &mut S,
        opts: &RenderOptions,
    ) -> Result<RenderReport, PipelineError> {
        let mut outstanding = 0usize;
        loop {
            let outcome = self.render_once(doc, surface, opts)?;
            outstanding += outcome.requested;

            if outcome.is_complete() || outstanding == 0 {
                return Ok(RenderReport {
                    content_height: outcome.content_height,
                    missing_images: outcome.missing_images,
                });
            }

            // Wait for at least one load, then absorb everything that is
            // already queued before rendering again.
            match self.rx.recv().await {
                Some(done) => {
                    self.apply_completion(surface, done);
                    outstanding -= 1;
                }
                None => unreachable!("renderer holds its own sender"),
            }
            while let Ok(done) = self.rx.try_recv() {
                self.apply_completion(surface, done);
                outstanding = outstanding.saturating_sub(1);
            }
        }
    }

    /// Hand the driver an already-decoded image, bypassing the fetcher.
    /// Embedders that run their own loader call this and then render again.
    /// Insertion is idempotent; the first handle for a URI wins.
    pub fn image_ready(&self, uri: &str, image: S::Image) {
        self.cache.insert(uri, image);
    }

    /// Absorb any completions that have arrived without rendering. Useful
    /// for embedders driving their own redraw schedule. Returns how many
    /// were applied.
    pub fn drain_completions(&mut self, surface: &S) -> usize {
        let mut applied = 0;
        while let Ok(done) = self.rx.try_recv() {
            self.apply_completion(surface, done);
            applied += 1;
        }
        applied
    }

    fn apply_completion(&self, surface: &S, done: LoadComplete) {
        if done.generation != self.generation {
            log::debug!(
                "stale completion for '{}' (pass {}, now {})",
                done.uri,
                done.generation,
                self.generation
            );
        }
        match done.result {
            Ok(bytes) => match surface.decode_image(&bytes) {
                Ok(image) => {
                    log::debug!("cached image '{}' ({} bytes)", done.uri, bytes.len());
                    self.cache.insert(&done.uri, image);
                }
                Err(err) => {
                    log::warn!("failed to decode '{}': {}", done.uri, err);
                    self.cache.mark_failed(&done.uri);
                }
            },
            Err(err) => {
                log::warn!("failed to load '{}': {}", done.uri, err);
                self.cache.mark_failed(&done.uri);
            }
        }
    }
}
