//! Task source resolution and discovery
//!
//! A source is either a single task file or a directory. Directories are
//! scanned one level deep; only entries whose file name starts with the
//! task prefix are loaded, in lexical file-name order.

use std::fs;
use std::path::{Path, PathBuf};
use taskdoc_types::Task;
use tracing::{debug, info};

use crate::decode::decode_task;
use crate::error::{LoaderError, Result};

/// File-name prefix marking a directory entry as a task definition
pub const TASK_FILE_PREFIX: &str = "task-";

/// What the user pointed us at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    /// A single task definition file
    File(PathBuf),
    /// A directory scanned for prefixed task files
    Directory(PathBuf),
}

impl TaskSource {
    /// Inspect `path` on disk and classify it
    pub fn resolve(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let metadata = fs::metadata(&path).map_err(|source| LoaderError::NotFound {
            path: path.clone(),
            source,
        })?;

        if metadata.is_dir() {
            Ok(Self::Directory(path))
        } else {
            Ok(Self::File(path))
        }
    }

    /// Path as given by the caller
    pub fn path(&self) -> &Path {
        match self {
            Self::File(path) | Self::Directory(path) => path,
        }
    }

    /// Directory label used in the generated document
    ///
    /// The directory itself for a directory source, the containing
    /// directory for a file source.
    pub fn folder_label(&self) -> String {
        let dir = match self {
            Self::Directory(path) => path.as_path(),
            Self::File(path) => path.parent().unwrap_or(Path::new("")),
        };

        let normalized: PathBuf = dir.components().collect();
        if normalized.as_os_str().is_empty() {
            ".".to_string()
        } else {
            normalized.display().to_string()
        }
    }
}

/// Loads every task a [`TaskSource`] designates
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskLoader;

impl TaskLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }

    /// List the files to load, in load order
    pub fn candidates(&self, source: &TaskSource) -> Result<Vec<PathBuf>> {
        match source {
            TaskSource::File(path) => Ok(vec![path.clone()]),
            TaskSource::Directory(dir) => self.scan_directory(dir),
        }
    }

    fn scan_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir_error = |source| LoaderError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let name = entry.file_name();

            if name.to_string_lossy().starts_with(TASK_FILE_PREFIX) {
                names.push(name);
            } else {
                debug!("Skipping {:?}: no '{}' prefix", entry.path(), TASK_FILE_PREFIX);
            }
        }

        names.sort();
        Ok(names.into_iter().map(|name| dir.join(name)).collect())
    }

    /// Load and decode every candidate, stopping at the first failure
    pub fn load(&self, source: &TaskSource) -> Result<Vec<Task>> {
        let candidates = self.candidates(source)?;
        info!(
            "Loading {} task file(s) from {:?}",
            candidates.len(),
            source.path()
        );

        candidates
            .iter()
            .map(PathBuf::as_path)
            .map(load_task)
            .collect()
    }
}

/// Read and decode a single task file
pub fn load_task(path: &Path) -> Result<Task> {
    let content = fs::read_to_string(path).map_err(|source| LoaderError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let task = decode_task(&content).map_err(|source| LoaderError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded task '{}' from {:?}", task.name(), path);
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_label_for_directory() {
        let source = TaskSource::Directory(PathBuf::from("catalog/tasks/"));
        assert_eq!(source.folder_label(), "catalog/tasks");
    }

    #[test]
    fn test_folder_label_for_file() {
        let source = TaskSource::File(PathBuf::from("catalog/tasks/task-build.yaml"));
        assert_eq!(source.folder_label(), "catalog/tasks");

        let bare = TaskSource::File(PathBuf::from("task-build.yaml"));
        assert_eq!(bare.folder_label(), ".");
    }

    #[test]
    fn test_single_file_candidate() {
        let source = TaskSource::File(PathBuf::from("anything.yaml"));
        let candidates = TaskLoader::new().candidates(&source);
        assert!(matches!(candidates, Ok(paths) if paths == vec![PathBuf::from("anything.yaml")]));
    }
}
