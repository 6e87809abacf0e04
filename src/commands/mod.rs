//! Command implementations for article-merge CLI

pub mod completions;
pub mod merge;
pub mod timeline;
pub mod version;

use std::path::PathBuf;

use crate::error::{MergeError, Result};

/// Workspace directory from `--workspace`, or the current directory
pub(crate) fn resolve_workspace(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| MergeError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
