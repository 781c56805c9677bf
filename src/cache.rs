use tracing::debug;

use crate::error::ScrapeError;
use crate::fetch::Fetch;
use crate::store::{page_key, PageStore};

/// Read-through page cache. Pages are stored under their sanitized URL
/// and never refetched once present, within or across runs.
pub struct PageCache<S, F> {
    store: S,
    fetcher: F,
}

impl<S: PageStore, F: Fetch> PageCache<S, F> {
    pub fn new(store: S, fetcher: F) -> Self {
        Self { store, fetcher }
    }

    /// Return the page body for `url`, downloading it on first use. The
    /// body always comes back out of the store, so cached and fresh
    /// lookups go through the same decoding path.
    pub fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let key = page_key(url);
        if let Some(body) = self.store.get(&key)? {
            debug!("cache hit: {}", key);
            return Ok(body);
        }
        debug!("cache miss: {}", key);
        let bytes = self.fetcher.fetch(url)?;
        self.store.put(&key, &bytes)?;
        self.store.get(&key)?.ok_or_else(|| ScrapeError::Io {
            path: key,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "page missing after write"),
        })
    }
}

// ── Tests ──
