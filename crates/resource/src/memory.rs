use placard_traits::{FetchCallback, ImageFetcher, ResourceError};
use std::collections::HashMap;
use std::sync::RwLock;

/// An in-memory image fetcher.
///
/// Byte buffers are stored in memory and must be pre-populated before use.
/// Completions fire synchronously on the requesting thread, which makes
/// this the fetcher of choice for tests and for documents whose images are
/// bundled with the caller.
#[derive(Debug, Default)]
pub struct InMemoryImageFetcher {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bytes served for `uri`. Overwrites any previous entry.
    pub fn add(&self, uri: impl Into<String>, bytes: Vec<u8>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(uri.into(), bytes);
        }
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(uri))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageFetcher for InMemoryImageFetcher {
    fn fetch(&self, uri: &str, done: FetchCallback) {
        let result = match self.entries.read() {
            Ok(entries) => entries
                .get(uri)
                .cloned()
                .ok_or_else(|| ResourceError::NotFound(uri.to_string())),
            Err(_) => Err(ResourceError::LoadFailed {
                uri: uri.to_string(),
                message: "fetcher store lock poisoned".to_string(),
            }),
        };
        done(result);
    }

    fn name(&self) -> &'static str {
        "InMemoryImageFetcher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn fetch_blocking(fetcher: &InMemoryImageFetcher, uri: &str) -> Result<Vec<u8>, ResourceError> {
        let slot = std::sync::Arc::new(Mutex::new(None));
        let out = slot.clone();
        fetcher.fetch(uri, Box::new(move |res| {
            *out.lock().unwrap() = Some(res);
        }));
        slot.lock().unwrap().take().expect("callback did not fire")
    }

    #[test]
    fn add_and_fetch() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("logo.png", b"\x89PNG".to_vec());

        let bytes = fetch_blocking(&fetcher, "logo.png").unwrap();
        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn missing_uri_is_not_found() {
        let fetcher = InMemoryImageFetcher::new();
        let result = fetch_blocking(&fetcher, "nope.png");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn overwrite_keeps_latest() {
        let fetcher = InMemoryImageFetcher::new();
        fetcher.add("a", vec![1]);
        fetcher.add("a", vec![2]);
        assert_eq!(fetch_blocking(&fetcher, "a").unwrap(), vec![2]);
        assert_eq!(fetcher.len(), 1);
    }
}
