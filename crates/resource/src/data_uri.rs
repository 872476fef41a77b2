use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use placard_traits::{FetchCallback, ImageFetcher, ResourceError};

/// Decode a `data:` URI payload into raw bytes.
///
/// Supports the base64 form (`data:image/png;base64,...`). Percent-encoded
/// text payloads are not image data and are rejected.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, ResourceError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| ResourceError::InvalidFormat(format!("not a data URI: {}", uri)))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ResourceError::InvalidFormat("data URI has no payload".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(ResourceError::InvalidFormat(
            "only base64 data URIs carry image bytes".to_string(),
        ));
    }

    STANDARD
        .decode(payload)
        .map_err(|e| ResourceError::InvalidFormat(format!("invalid base64 payload: {}", e)))
}

/// Fetcher that resolves `data:` URIs locally and delegates everything else
/// to an inner fetcher.
#[derive(Debug)]
pub struct DataUriFetcher<F: ImageFetcher> {
    inner: F,
}

impl<F: ImageFetcher> DataUriFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: ImageFetcher> ImageFetcher for DataUriFetcher<F> {
    fn fetch(&self, uri: &str, done: FetchCallback) {
        if uri.starts_with("data:") {
            let result = decode_data_uri(uri);
            if let Err(e) = &result {
                log::debug!("data URI rejected: {}", e);
            }
            done(result);
        } else {
            self.inner.fetch(uri, done);
        }
    }

    fn name(&self) -> &'static str {
        "DataUriFetcher"
    }
}
