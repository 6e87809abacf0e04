//! Common test utilities for article-merge integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A blog workspace in a temporary directory
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace with an empty metadata directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("metadata")).expect("Failed to create metadata dir");
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write `metadata/<slug>.yaml`
    #[allow(dead_code)]
    pub fn write_metadata(&self, slug: &str, yaml: &str) {
        self.write_file(&format!("metadata/{}.yaml", slug), yaml);
    }

    /// Write `<slug>.md` at the workspace root
    #[allow(dead_code)]
    pub fn write_body(&self, slug: &str, body: &str) {
        self.write_file(&format!("{}.md", slug), body);
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the real binary, run inside the workspace with the
    /// directory override variables cleared
    pub fn cmd(&self) -> Command {
        let mut cmd = article_merge_cmd();
        cmd.current_dir(&self.path)
            .env_remove("ARTICLE_MERGE_METADATA_DIR")
            .env_remove("ARTICLE_MERGE_ARTICLES_DIR")
            .env_remove("ARTICLE_MERGE_OUTPUT_DIR");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn article_merge_cmd() -> Command {
    Command::cargo_bin("article-merge").expect("binary should be built")
}

/// Metadata used across tests
#[allow(dead_code)]
pub const SAMPLE_METADATA: &str = r#"title: Sample
emoji: "📝"
type: tech
topics:
  - a
  - b
published: true
"#;
