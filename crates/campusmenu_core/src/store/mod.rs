//! JSON document store, the persistence engine behind every collection.
//!
//! # Responsibility
//! - Save and load whole serializable values as pretty-printed JSON documents
//!   inside one storage directory.
//! - Keep failure handling explicit: callers get `StoreResult`, and the
//!   degrade-to-default policy lives in one named place (`load_or_default`).
//!
//! # Invariants
//! - One document name maps to exactly one file; every save is a full-file
//!   replace, never an append or partial write.
//! - A missing document is "absent" (`Ok(None)`), never an error.
//! - Dates cross the wire as ISO-8601 (chrono serde defaults).

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure modes of document persistence, each tagged with the document name.
#[derive(Debug)]
pub enum StoreError {
    Io {
        doc: String,
        source: std::io::Error,
    },
    Encode {
        doc: String,
        source: serde_json::Error,
    },
    Decode {
        doc: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Name of the document the failure belongs to.
    pub fn doc(&self) -> &str {
        match self {
            Self::Io { doc, .. } | Self::Encode { doc, .. } | Self::Decode { doc, .. } => doc,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { doc, source } => write!(f, "i/o failure on document `{doc}`: {source}"),
            Self::Encode { doc, source } => {
                write!(f, "failed to encode document `{doc}`: {source}")
            }
            Self::Decode { doc, source } => {
                write!(f, "failed to decode document `{doc}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } | Self::Decode { source, .. } => Some(source),
        }
    }
}

/// File-per-document JSON store bound to one storage directory.
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Opens a store rooted at `dir`, creating the directory when missing.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            doc: dir.display().to_string(),
            source,
        })?;
        info!(
            "event=store_open module=store status=ok dir={}",
            dir.display()
        );
        Ok(Self { dir })
    }

    /// Absolute path of a named document inside this store.
    pub fn path_for(&self, doc: &str) -> PathBuf {
        self.dir.join(doc)
    }

    /// Whether the named document currently exists on disk.
    pub fn exists(&self, doc: &str) -> bool {
        self.path_for(doc).is_file()
    }

    /// Serializes `value` and replaces the named document with it.
    pub fn save<T: Serialize>(&self, doc: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
            doc: doc.to_string(),
            source,
        })?;
        std::fs::write(self.path_for(doc), json).map_err(|source| StoreError::Io {
            doc: doc.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads and parses the named document.
    ///
    /// Returns `Ok(None)` when the document does not exist. I/O and parse
    /// failures are returned as errors so tests can assert on them.
    pub fn load<T: DeserializeOwned>(&self, doc: &str) -> StoreResult<Option<T>> {
        let path = self.path_for(doc);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path).map_err(|source| StoreError::Io {
            doc: doc.to_string(),
            source,
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            doc: doc.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Loads the named document, degrading to `T::default()` on any failure.
    ///
    /// This is the deliberate startup policy: an unreadable or corrupt
    /// document must not prevent the repository from coming up, but the
    /// degrade is logged instead of silent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, doc: &str) -> T {
        match self.load(doc) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(
                    "event=doc_load module=store status=degraded doc={doc} error={err}"
                );
                T::default()
            }
        }
    }

    /// Removes the named document. A missing document counts as success.
    pub fn remove(&self, doc: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(doc)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                doc: doc.to_string(),
                source,
            }),
        }
    }
}
