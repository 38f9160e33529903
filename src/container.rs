//! Zip container access
//!
//! Word-processor and presentation files are zip archives whose body lives
//! in one XML entry. The entry is copied into a temporary directory that is
//! removed when the returned [`ExtractedEntry`] is dropped.

use crate::error::ExtractionError;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// An archive entry copied to disk
#[derive(Debug)]
pub struct ExtractedEntry {
    path: PathBuf,
    // Held so the directory lives as long as the entry
    _dir: TempDir,
}

impl ExtractedEntry {
    /// Location of the extracted bytes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the extracted entry as UTF-8 text
    pub fn read_to_string(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Copy `entry` out of the zip archive at `container`
pub fn extract_entry(container: &Path, entry: &str) -> Result<ExtractedEntry, ExtractionError> {
    let file = File::open(container).map_err(|source| ExtractionError::Open {
        path: container.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| ExtractionError::Archive {
        path: container.to_path_buf(),
        source,
    })?;

    let mut zipped = match archive.by_name(entry) {
        Ok(zipped) => zipped,
        Err(ZipError::FileNotFound) => {
            return Err(ExtractionError::EntryNotFound {
                path: container.to_path_buf(),
                entry: entry.to_string(),
            })
        }
        Err(source) => {
            return Err(ExtractionError::Archive {
                path: container.to_path_buf(),
                source,
            })
        }
    };

    let write_err = |source: io::Error| ExtractionError::Write {
        entry: entry.to_string(),
        source,
    };

    let dir = tempfile::Builder::new()
        .prefix("kids-kanji-checker-")
        .tempdir()
        .map_err(write_err)?;
    let path = entry
        .split('/')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .fold(dir.path().to_path_buf(), |acc, part| acc.join(part));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut out = File::create(&path).map_err(write_err)?;
    io::copy(&mut zipped, &mut out).map_err(write_err)?;

    debug!(container = %container.display(), entry, path = %path.display(), "extracted content entry");
    Ok(ExtractedEntry { path, _dir: dir })
}
