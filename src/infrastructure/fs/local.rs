//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::error::{WebpageError, WebpageResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory and a rename, so a
/// reader never sees a half-written `index.html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> WebpageResult<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => WebpageError::MissingAsset {
                path: path.to_path_buf(),
            },
            _ => WebpageError::io(path, e),
        })
    }

    fn write(&self, path: &Path, content: &str) -> WebpageResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| WebpageError::io(parent, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| WebpageError::io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| WebpageError::io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| WebpageError::io(path, e.error))?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> WebpageResult<()> {
        if !from.is_file() {
            return Err(WebpageError::MissingAsset {
                path: from.to_path_buf(),
            });
        }
        std::fs::copy(from, to).map_err(|e| WebpageError::io(to, e))?;
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> WebpageResult<()> {
        std::fs::create_dir_all(path).map_err(|e| WebpageError::io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> WebpageResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| WebpageError::io(path, e))
    }
}
