//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the use cases to touch the disk without depending on a
//! concrete implementation. Errors carry the offending path.

use std::path::Path;

use crate::error::WebpageResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> WebpageResult<String>;

    /// Write content to file atomically, replacing any existing file
    fn write(&self, path: &Path, content: &str) -> WebpageResult<()>;

    /// Copy a file. A missing source is reported as `WebpageError::MissingAsset`.
    fn copy(&self, from: &Path, to: &Path) -> WebpageResult<()>;

    /// True if `path` is an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> WebpageResult<()>;

    /// Recursively delete a directory and everything in it
    fn remove_dir_all(&self, path: &Path) -> WebpageResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> WebpageResult<String> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> WebpageResult<()> {
        (**self).write(path, content)
    }

    fn copy(&self, from: &Path, to: &Path) -> WebpageResult<()> {
        (**self).copy(from, to)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> WebpageResult<()> {
        (**self).create_dir_all(path)
    }

    fn remove_dir_all(&self, path: &Path) -> WebpageResult<()> {
        (**self).remove_dir_all(path)
    }
}
