// ABOUTME: Resolves user-supplied config file paths against a fixed list of roots.
// ABOUTME: Order: as given, next to the installed binary, then the working directory.

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directories a relative config path may be resolved against.
#[derive(Debug, Clone, Default)]
pub struct SearchRoots {
    /// Directory the tool is installed in.
    pub package: Option<PathBuf>,
    /// Working directory of the current process.
    pub process: Option<PathBuf>,
}

impl SearchRoots {
    /// Roots for the running process.
    pub fn current() -> Self {
        let package = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let process = env::current_dir().ok();
        Self { package, process }
    }

    fn candidates(&self, path: &Path) -> Vec<PathBuf> {
        let mut candidates = vec![path.to_path_buf()];
        if let Some(root) = &self.package {
            candidates.push(root.join(path));
        }
        if let Some(root) = &self.process {
            candidates.push(root.join(path));
        }
        candidates
    }
}

/// Find `path` under the search roots.
pub fn locate(path: &Path, roots: &SearchRoots) -> Result<PathBuf> {
    let found = roots.candidates(path).into_iter().find(|c| c.is_file());

    match found {
        Some(found) => {
            tracing::debug!(requested = %path.display(), resolved = %found.display(), "config file located");
            Ok(found)
        }
        None => Err(Error::ConfigNotFound(path.to_path_buf())),
    }
}
