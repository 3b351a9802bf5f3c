// SPDX-License-Identifier: MPL-2.0
//! Downloaded image bytes, keyed by address.
//!
//! Every address is requested at most once while it stays in the store. A
//! failed download is kept as [`RemoteImage::Failed`] and never retried.

use crate::error::Result;
use crate::reveal::ease_out_cubic;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Fade-in length of a freshly downloaded image.
pub const IMAGE_FADE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub enum RemoteImage {
    Loading,
    Loaded {
        handle: image::Handle,
        /// When the download finished.
        at: Instant,
    },
    Failed(String),
}

/// Fade-in opacity of an image that finished loading at `loaded_at`.
#[must_use]
pub fn fade_in(loaded_at: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(loaded_at);
    ease_out_cubic(elapsed.as_secs_f32() / IMAGE_FADE.as_secs_f32())
}

pub struct ImageStore {
    cache: LruCache<String, RemoteImage>,
}

impl ImageStore {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading. Returns `false` when it is already known, in
    /// which case no download should be started.
    pub fn request(&mut self, url: &str) -> bool {
        if self.cache.contains(url) {
            return false;
        }
        if let Some((evicted, _)) = self.cache.push(url.to_string(), RemoteImage::Loading) {
            if evicted != url {
                tracing::debug!(url = %evicted, "image evicted");
            }
        }
        true
    }

    /// Records the download outcome for `url`, finished at `now`.
    pub fn finish(&mut self, url: &str, outcome: Result<Vec<u8>>, now: Instant) {
        let entry = match outcome {
            Ok(bytes) => {
                tracing::debug!(url, bytes = bytes.len(), "image downloaded");
                RemoteImage::Loaded {
                    handle: image::Handle::from_bytes(bytes),
                    at: now,
                }
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "image download failed");
                RemoteImage::Failed(err.to_string())
            }
        };
        self.cache.put(url.to_string(), entry);
    }

    /// Looks up `url` without touching its recency.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&RemoteImage> {
        self.cache.peek(url)
    }

    #[must_use]
    pub fn any_loading(&self) -> bool {
        self.cache
            .iter()
            .any(|(_, entry)| matches!(entry, RemoteImage::Loading))
    }

    /// Whether a loaded image is still fading in at `now`.
    #[must_use]
    pub fn any_fading(&self, now: Instant) -> bool {
        self.cache.iter().any(|(_, entry)| match entry {
            RemoteImage::Loaded { at, .. } => now.saturating_duration_since(*at) < IMAGE_FADE,
            RemoteImage::Loading | RemoteImage::Failed(_) => false,
        })
    }
}

impl std::fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStore")
            .field("entries", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}
