//! Disposable benchmark workspace
//!
//! Each run gets a fresh temp tree so reruns never collide and never
//! touch shared state. The tree is kept after the run for inspection;
//! removal is an explicit opt-in.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("failed to provision workspace: {0}")]
    Io(#[from] io::Error),
}

/// One run's working tree: fixture files under `csvs/`, the target
/// tool's project under `project/`.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    data_dir: PathBuf,
    project_dir: PathBuf,
}

impl Workspace {
    /// Create a fresh, uniquely-named workspace under the system temp dir
    pub fn provision() -> Result<Self, WorkspaceError> {
        Self::provision_in(std::env::temp_dir())
    }

    /// Create a fresh workspace under the given base directory
    pub fn provision_in(base: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        // keep() detaches the directory from tempfile's drop-time cleanup;
        // the workspace must outlive the process.
        let root = tempfile::Builder::new()
            .prefix("tdt-bench-")
            .tempdir_in(base)?
            .keep();

        let data_dir = root.join("csvs");
        let project_dir = root.join("project");
        fs::create_dir(&data_dir)?;
        fs::create_dir(&project_dir)?;

        Ok(Self {
            root,
            data_dir,
            project_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory the generated fixture files are written to
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory the target tool runs in (its project root)
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Delete the whole tree (the `--cleanup` path)
    pub fn remove(self) -> io::Result<()> {
        fs::remove_dir_all(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn provision_creates_data_and_project_dirs() {
        let base = TempDir::new().unwrap();
        let ws = Workspace::provision_in(base.path()).unwrap();
        assert!(ws.root().starts_with(base.path()));
        assert!(ws.data_dir().is_dir());
        assert!(ws.project_dir().is_dir());
    }

    #[test]
    fn provision_never_reuses_a_workspace() {
        let base = TempDir::new().unwrap();
        let a = Workspace::provision_in(base.path()).unwrap();
        let b = Workspace::provision_in(base.path()).unwrap();
        assert_ne!(a.root(), b.root());
    }

    #[test]
    fn remove_deletes_the_tree() {
        let base = TempDir::new().unwrap();
        let ws = Workspace::provision_in(base.path()).unwrap();
        let root = ws.root().to_path_buf();
        ws.remove().unwrap();
        assert!(!root.exists());
    }
}
