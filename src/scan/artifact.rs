//! Read-only access to project artifacts.
//!
//! [`ScanContext`] is what every rule receives: the project root plus the
//! scan configuration that says where each artifact lives. All paths handed
//! to and returned from the context are relative to the project root, so
//! findings read the same regardless of where the scan was started.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;
use crate::error::{Result, ShipcheckError};

/// Inputs shared by every rule during one scan.
#[derive(Debug, Clone)]
pub struct ScanContext {
    root: PathBuf,
    config: ScanConfig,
}

impl ScanContext {
    /// Create a context for the project at `root`.
    pub fn new(root: impl Into<PathBuf>, config: ScanConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Absolute path of a project-relative artifact.
    pub fn path(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }

    /// Whether a project-relative artifact exists.
    pub fn exists(&self, rel: &Path) -> bool {
        self.path(rel).exists()
    }

    /// Read an artifact as text.
    ///
    /// Returns `Ok(None)` when the artifact does not exist, and
    /// `ArtifactRead` when it exists but cannot be read. Bytes that are not
    /// valid UTF-8 are replaced so the remaining lines can still be matched.
    pub fn read(&self, rel: &Path) -> Result<Option<String>> {
        let bytes = match fs::read(self.path(rel)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(artifact = %rel.display(), "artifact absent");
                return Ok(None);
            }
            Err(source) => {
                return Err(ShipcheckError::ArtifactRead {
                    path: rel.to_path_buf(),
                    source,
                })
            }
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                tracing::debug!(artifact = %rel.display(), "artifact is not valid UTF-8, decoding lossily");
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }

    /// Recursively list files with `extension` under the directory `rel`.
    ///
    /// Hidden and ignored files are included, as are symlinks to files.
    /// Paths are project-relative and sorted. Entries the walk cannot list
    /// are returned alongside the files instead of ending the walk. Returns
    /// `Ok(None)` when the directory does not exist.
    pub fn source_files(&self, rel: &Path, extension: &str) -> Result<Option<SourceFiles>> {
        let dir = self.path(rel);
        if !dir.is_dir() {
            tracing::debug!(dir = %rel.display(), "source directory absent");
            return Ok(None);
        }

        let walker = ignore::WalkBuilder::new(&dir)
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut sources = SourceFiles::default();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "source walk error");
                    sources.errors.push(self.walk_error(err));
                    continue;
                }
            };
            let path = entry.path();
            let listable = entry
                .file_type()
                .is_some_and(|t| t.is_file() || (t.is_symlink() && !path.is_dir()));
            if !listable {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            sources.files.push(self.relative(path));
        }

        sources.files.sort();
        Ok(Some(sources))
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    fn walk_error(&self, err: ignore::Error) -> ShipcheckError {
        let path = walk_error_path(&err).map(|p| self.relative(p));
        let message = err.to_string();
        match (path, err.into_io_error()) {
            (Some(path), Some(source)) => ShipcheckError::ArtifactRead { path, source },
            _ => ShipcheckError::Other(anyhow::anyhow!(message)),
        }
    }
}

/// Result of walking a source directory.
#[derive(Debug, Default)]
pub struct SourceFiles {
    /// Project-relative files, sorted.
    pub files: Vec<PathBuf>,
    /// Entries that could not be listed.
    pub errors: Vec<ShipcheckError>,
}

fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}
