//! Temporary status artifacts for reader and endpoint tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures::DEFAULT_ARTIFACT_NAME;

/// Temporary directory holding a single status artifact path.
///
/// The artifact does not exist until one of the write helpers is called, so a
/// fresh instance models a producer that has not started yet.
pub struct ArtifactDir {
    dir: TempDir,
    path: PathBuf,
}

impl ArtifactDir {
    /// Create an empty directory; the artifact path is not created.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("seedview-").tempdir()?;
        let path = dir.path().join(DEFAULT_ARTIFACT_NAME);
        Ok(Self { dir, path })
    }

    /// Path of the artifact inside the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Root of the temporary directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Replace the artifact contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, contents: impl AsRef<[u8]>) -> io::Result<()> {
        fs::write(&self.path, contents)
    }

    /// Create a zero-length artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_empty(&self) -> io::Result<()> {
        self.write(b"")
    }

    /// Remove the artifact if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_lifecycle() -> io::Result<()> {
        let artifact = ArtifactDir::new()?;
        assert!(!artifact.path().exists());
        assert!(artifact.path().starts_with(artifact.root()));

        artifact.write_empty()?;
        assert_eq!(fs::metadata(artifact.path())?.len(), 0);

        artifact.write("{}")?;
        assert_eq!(fs::read_to_string(artifact.path())?, "{}");

        artifact.remove()?;
        assert!(!artifact.path().exists());
        artifact.remove()?;
        Ok(())
    }
}
