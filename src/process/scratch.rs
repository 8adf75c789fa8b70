// file: src/process/scratch.rs
// version: 1.0.0
// guid: 5d0f3b96-7a2e-4c81-9e4d-c6a1b8f07e52

//! Scoped temporary files for exchanging license payloads with `ring`

use crate::error::{AgentError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

const FILE_NAME: &str = "license.lic";

/// A uniquely named temporary file that is removed when the scope ends
///
/// The file lives alone in a private `hydra-*` directory, so concurrent calls
/// never share a name and the external tool is free to create the file itself.
/// [`ScratchFile::close`] reports removal failures; dropping the value instead
/// removes it silently apart from a warning in the log.
#[derive(Debug)]
pub struct ScratchFile {
    dir: Option<TempDir>,
    path: PathBuf,
}

impl ScratchFile {
    /// Reserve a path that does not exist yet
    pub fn reserve(root: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("hydra-");

        let dir = match root {
            Some(root) => builder
                .tempdir_in(root)
                .map_err(|e| AgentError::filesystem(root, e))?,
            None => builder
                .tempdir()
                .map_err(|e| AgentError::filesystem(std::env::temp_dir(), e))?,
        };

        let path = dir.path().join(FILE_NAME);
        debug!("Reserved scratch file {}", path.display());

        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    /// Reserve a path and write `contents` to it
    pub fn with_contents(root: Option<&Path>, contents: &[u8]) -> Result<Self> {
        let scratch = Self::reserve(root)?;
        fs::write(&scratch.path, contents).map_err(|e| AgentError::filesystem(&scratch.path, e))?;
        Ok(scratch)
    }

    /// Location handed to the external process
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file's raw bytes
    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| AgentError::filesystem(&self.path, e))
    }

    /// Remove the file and its directory, reporting any failure
    pub fn close(mut self) -> Result<()> {
        match self.dir.take() {
            Some(dir) => {
                let dir_path = dir.path().to_path_buf();
                dir.close().map_err(|e| AgentError::filesystem(dir_path, e))
            }
            None => Ok(()),
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let dir_path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                warn!("Failed to remove scratch directory {}: {}", dir_path.display(), e);
            }
        }
    }
}
