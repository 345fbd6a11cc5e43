//! Public asset directory index.
//!
//! Image references in the content are plain labels. When a file with the
//! same name sits in the public directory the renderer shows the real image,
//! otherwise it falls back to a placeholder tile.

use crate::{Error, Result};
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeSet;
use std::path::Path;

/// Characters escaped when a file name becomes a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// File names available in the public asset directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    files: BTreeSet<String>,
}

impl AssetIndex {
    /// An index with no assets; every tile renders as a placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index the top-level regular files of `dir`.
    ///
    /// A missing directory is not an error and yields an empty index.
    pub fn scan(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            debug!("asset directory {} not found; using placeholders", dir.display());
            return Ok(Self::empty());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        let mut files = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
            if !file_type.is_file() {
                warn!("skipping non-file asset {}", path.display());
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => {
                    files.insert(name);
                }
                Err(raw) => warn!("skipping asset with non UTF-8 name {:?}", raw),
            }
        }
        debug!("indexed {} assets in {}", files.len(), dir.display());
        Ok(Self { files })
    }

    /// Build an index from known names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Site-absolute, percent-encoded URL of the asset for `label`, if it exists
    pub fn resolve(&self, label: &str) -> Option<String> {
        self.contains(label)
            .then(|| format!("/{}", utf8_percent_encode(label, PATH_SEGMENT)))
    }

    /// Indexed file names in sorted order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
