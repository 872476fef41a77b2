//! Long-lived image cache shared across render passes.
//!
//! The cache is append-only: a decoded handle is stored exactly once per
//! distinct URI and never evicted. The in-flight set deduplicates loads
//! (one request per key no matter how many passes miss it) and the failed
//! set keeps broken sources from being re-requested forever.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

pub struct ImageCache<I> {
    entries: RwLock<HashMap<String, I>>,
    in_flight: RwLock<HashSet<String>>,
    failed: RwLock<HashSet<String>>,
}

impl<I> Default for ImageCache<I> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            in_flight: RwLock::new(HashSet::new()),
            failed: RwLock::new(HashSet::new()),
        }
    }
}

impl<I: Clone> ImageCache<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str) -> Option<I> {
        self.entries.read().ok()?.get(uri).cloned()
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(uri))
            .unwrap_or(false)
    }

    /// Store a decoded handle. The first insert for a URI wins; the load is
    /// no longer considered in flight afterwards.
    pub fn insert(&self, uri: &str, image: I) {
        if let Ok(mut entries) = self.entries.write() {
            entries.entry(uri.to_string()).or_insert(image);
        }
        if let Ok(mut in_flight) = self.in_flight.write() {
            in_flight.remove(uri);
        }
    }

    /// Mark `uri` as having a load in progress. Returns `true` only for the
    /// first caller; cached, failed, and already-in-flight URIs return
    /// `false` so at most one fetch exists per key.
    pub fn begin_load(&self, uri: &str) -> bool {
        if self.contains(uri) || self.is_failed(uri) {
            return false;
        }
        match self.in_flight.write() {
            Ok(mut in_flight) => in_flight.insert(uri.to_string()),
            Err(_) => false,
        }
    }

    /// Record a permanently failed load; the URI is never requested again
    /// and the image degrades to occupying no space.
    pub fn mark_failed(&self, uri: &str) {
        if let Ok(mut in_flight) = self.in_flight.write() {
            in_flight.remove(uri);
        }
        if let Ok(mut failed) = self.failed.write() {
            failed.insert(uri.to_string());
        }
    }

    pub fn is_failed(&self, uri: &str) -> bool {
        self.failed
            .read()
            .map(|f| f.contains(uri))
            .unwrap_or(false)
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
