use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;

/// Key-value store for fetched pages. Keys are sanitized filenames (see
/// [`page_key`]); values are raw page bodies.
pub trait PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ScrapeError>;
    fn put(&self, key: &str, body: &[u8]) -> Result<(), ScrapeError>;
}

/// One file per key under a flat directory.
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Open the store, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, ScrapeError> {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PageStore for DiskStore {
    fn get(&self, key: &str) -> Result<Option<String>, ScrapeError> {
        let path = self.file_path(key);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScrapeError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    fn put(&self, key: &str, body: &[u8]) -> Result<(), ScrapeError> {
        let path = self.file_path(key);
        fs::write(&path, body).map_err(|e| ScrapeError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Turn a URL into a filename: slashes become underscores, `:` and `?`
/// are dropped, `.html` is appended.
pub fn page_key(url: &str) -> String {
    let mut key: String = url
        .chars()
        .filter_map(|c| match c {
            '/' => Some('_'),
            ':' | '?' => None,
            other => Some(other),
        })
        .collect();
    key.push_str(".html");
    key
}

// ── Tests ──
