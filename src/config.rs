//! Merge configuration
//!
//! Directory layout for one workspace: where metadata files, article bodies
//! and merged output live. Values come from CLI flags (or their environment
//! variables), then the optional `article-merge.yaml` in the workspace root,
//! then the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MergeError, Result};

/// Workspace config filename
pub const CONFIG_FILE: &str = "article-merge.yaml";

/// Extension of structured metadata files
pub const METADATA_EXTENSION: &str = "yaml";

/// Extension of article bodies and merged output
pub const BODY_EXTENSION: &str = "md";

const DEFAULT_METADATA_DIR: &str = "metadata";
const DEFAULT_ARTICLES_DIR: &str = ".";
const DEFAULT_OUTPUT_DIR: &str = "zenn-articles";

/// On-disk shape of `article-merge.yaml`
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub metadata_dir: Option<PathBuf>,
    pub articles_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes as null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Directory overrides supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct DirOverrides {
    pub metadata_dir: Option<PathBuf>,
    pub articles_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Resolved directories used by the merger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub metadata_root: PathBuf,
    pub articles_root: PathBuf,
    pub output_root: PathBuf,
}

impl MergeConfig {
    /// Default layout rooted at `workspace`
    pub fn with_workspace(workspace: &Path) -> Self {
        Self {
            metadata_root: workspace.join(DEFAULT_METADATA_DIR),
            articles_root: workspace.join(DEFAULT_ARTICLES_DIR),
            output_root: workspace.join(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Resolve the layout for `workspace`, layering the config file and
    /// command-line overrides over the defaults
    pub fn load(workspace: &Path, overrides: &DirOverrides) -> Result<Self> {
        let file = load_config_file(workspace)?;
        let mut config = Self::with_workspace(workspace);

        let pick = |flag: &Option<PathBuf>, from_file: &Option<PathBuf>| {
            flag.as_ref().or(from_file.as_ref()).map(|p| workspace.join(p))
        };

        if let Some(dir) = pick(&overrides.metadata_dir, &file.metadata_dir) {
            config.metadata_root = dir;
        }
        if let Some(dir) = pick(&overrides.articles_dir, &file.articles_dir) {
            config.articles_root = dir;
        }
        if let Some(dir) = pick(&overrides.output_dir, &file.output_dir) {
            config.output_root = dir;
        }

        Ok(config)
    }

    pub fn metadata_path(&self, slug: &str) -> PathBuf {
        self.metadata_root
            .join(format!("{}.{}", slug, METADATA_EXTENSION))
    }

    pub fn body_path(&self, slug: &str) -> PathBuf {
        self.articles_root.join(format!("{}.{}", slug, BODY_EXTENSION))
    }

    pub fn output_path(&self, slug: &str) -> PathBuf {
        self.output_root.join(format!("{}.{}", slug, BODY_EXTENSION))
    }
}

/// Load `article-merge.yaml` from the workspace; a missing file yields defaults
fn load_config_file(workspace: &Path) -> Result<ConfigFile> {
    let path = workspace.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| MergeError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    ConfigFile::from_yaml(&content).map_err(|e| MergeError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let config = MergeConfig::with_workspace(Path::new("/blog"));
        assert_eq!(config.metadata_root, Path::new("/blog/metadata"));
        assert_eq!(config.articles_root, Path::new("/blog/."));
        assert_eq!(config.output_root, Path::new("/blog/zenn-articles"));
    }

    #[test]
    fn test_paths_for_slug() {
        let config = MergeConfig::with_workspace(Path::new("/blog"));
        assert_eq!(
            config.metadata_path("jj-intro"),
            Path::new("/blog/metadata/jj-intro.yaml")
        );
        assert_eq!(config.body_path("jj-intro"), Path::new("/blog/./jj-intro.md"));
        assert_eq!(
            config.output_path("jj-intro"),
            Path::new("/blog/zenn-articles/jj-intro.md")
        );
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = MergeConfig::load(temp.path(), &DirOverrides::default()).unwrap();
        assert_eq!(config, MergeConfig::with_workspace(temp.path()));
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "metadata_dir: meta\noutput_dir: out/zenn\n",
        )
        .unwrap();

        let config = MergeConfig::load(temp.path(), &DirOverrides::default()).unwrap();
        assert_eq!(config.metadata_root, temp.path().join("meta"));
        assert_eq!(config.articles_root, temp.path().join("."));
        assert_eq!(config.output_root, temp.path().join("out/zenn"));
    }

    #[test]
    fn test_flags_take_precedence_over_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "articles_dir: posts\n").unwrap();

        let overrides = DirOverrides {
            articles_dir: Some(PathBuf::from("drafts")),
            ..Default::default()
        };
        let config = MergeConfig::load(temp.path(), &overrides).unwrap();
        assert_eq!(config.articles_root, temp.path().join("drafts"));
    }

    #[test]
    fn test_absolute_override_is_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let overrides = DirOverrides {
            output_dir: Some(elsewhere.path().to_path_buf()),
            ..Default::default()
        };
        let config = MergeConfig::load(temp.path(), &overrides).unwrap();
        assert_eq!(config.output_root, elsewhere.path());
    }

    #[test]
    fn test_empty_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "\n").unwrap();
        let config = MergeConfig::load(temp.path(), &DirOverrides::default()).unwrap();
        assert_eq!(config, MergeConfig::with_workspace(temp.path()));
    }

    #[test]
    fn test_unknown_config_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "output: zenn\n").unwrap();
        let err = MergeConfig::load(temp.path(), &DirOverrides::default()).unwrap_err();
        assert!(matches!(err, MergeError::ConfigParseFailed { .. }));
    }
}
