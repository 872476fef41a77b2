//! Image source resolution.
//!
//! Inline and background sources are keyed by their resolved URI: remote
//! and data URIs are used verbatim, local keys go through the embedded
//! image map first. A cache hit hands back the decoded handle; a miss is
//! recorded so the driver can load it and render the document again.

use crate::walker::Walker;
use placard_traits::Surface;

impl<'a, S: Surface> Walker<'a, S> {
    pub(crate) fn resolve_image(&mut self, src: &str) -> Option<S::Image> {
        let uri = if is_absolute_uri(src) {
            src.to_string()
        } else {
            match self.opts.embedded_images.get(src) {
                Some(uri) => uri.clone(),
                None => {
                    log::debug!("no embedded image registered for key '{}'", src);
                    return None;
                }
            }
        };

        if let Some(image) = self.cache.get(&uri) {
            return Some(image);
        }

        if !self.missing.iter().any(|m| *m == uri) {
            log::debug!("image cache miss for '{}'", uri);
            self.missing.push(uri);
        }
        None
    }
}

pub(crate) fn is_absolute_uri(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:")
}
