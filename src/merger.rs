//! Article merger
//!
//! Resolves the metadata and body for a slug, projects the metadata to the
//! published front matter, and writes the merged document to the output
//! directory. Per-article failures are reported and turned into `false`;
//! only the batch listing itself can fail the whole run.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::article::{self, ArticleMetadata};
use crate::config::{METADATA_EXTENSION, MergeConfig};
use crate::error::{MergeError, Result};
use crate::ui::{BatchSummary, MergeReport, Reporter};

pub struct ArticleMerger<R: Reporter> {
    config: MergeConfig,
    reporter: R,
}

impl<R: Reporter> ArticleMerger<R> {
    pub fn new(config: MergeConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    #[cfg(test)]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Merge a single article. Returns whether the output was written.
    pub fn merge_one(&mut self, slug: &str) -> bool {
        match self.try_merge(slug) {
            Ok(report) => {
                self.reporter.item_merged(&report);
                true
            }
            Err(e) => {
                self.reporter.item_failed(slug, &e);
                false
            }
        }
    }

    /// Merge every article that has a metadata file, in slug order.
    /// Failed articles are counted, never fatal.
    pub fn merge_all(&mut self) -> Result<BatchSummary> {
        let slugs = discover_slugs(&self.config.metadata_root)?;
        let total = slugs.len();

        self.reporter.batch_started(total);

        let mut summary = BatchSummary {
            succeeded: 0,
            attempted: total,
        };
        for (i, slug) in slugs.iter().enumerate() {
            self.reporter.item_started(slug, i + 1, total);
            if self.merge_one(slug) {
                summary.succeeded += 1;
            }
        }

        self.reporter.batch_finished(&summary);
        Ok(summary)
    }

    fn try_merge(&mut self, slug: &str) -> Result<MergeReport> {
        let metadata_path = self.config.metadata_path(slug);
        if !metadata_path.is_file() {
            return Err(MergeError::MetadataNotFound {
                path: metadata_path.display().to_string(),
            });
        }
        self.reporter
            .detail(&format!("metadata: {}", metadata_path.display()));

        let metadata_source =
            fs::read_to_string(&metadata_path).map_err(|e| read_failed(&metadata_path, &e))?;
        let metadata = ArticleMetadata::from_yaml(&metadata_source).map_err(|reason| {
            MergeError::MalformedMetadata {
                path: metadata_path.display().to_string(),
                reason,
            }
        })?;

        let body_path = self.config.body_path(slug);
        if !body_path.is_file() {
            return Err(MergeError::BodyNotFound {
                path: body_path.display().to_string(),
            });
        }
        self.reporter.detail(&format!("body: {}", body_path.display()));

        let body = fs::read(&body_path).map_err(|e| read_failed(&body_path, &e))?;

        // Checked before writing so a bad item leaves no output behind
        let topics = metadata.topics().ok_or_else(|| MergeError::MissingTopics {
            slug: slug.to_string(),
        })?;

        if metadata.has_unknown_type() {
            self.reporter.warning(&format!(
                "{}: unrecognized article type '{}' (expected one of: {})",
                slug,
                metadata.article_type().unwrap_or_default(),
                article::KNOWN_ARTICLE_TYPES.join(", ")
            ));
        }

        let front_matter = article::serialize_front_matter(&metadata.front_matter())?;
        let document = article::compose(&front_matter, &body);

        fs::create_dir_all(&self.config.output_root).map_err(|e| MergeError::FileWriteFailed {
            path: self.config.output_root.display().to_string(),
            reason: e.to_string(),
        })?;

        let output_path = self.config.output_path(slug);
        write_replacing(&output_path, &self.config.output_root, &document)?;

        Ok(MergeReport {
            slug: slug.to_string(),
            output_path,
            title: metadata.title(),
            topics,
            ignored_fields: metadata.ignored_fields(),
        })
    }
}

/// Slugs of all `*.yaml` files directly inside `metadata_root`, sorted
pub fn discover_slugs(metadata_root: &Path) -> Result<Vec<String>> {
    let unreadable = |reason: String| MergeError::MetadataDirUnreadable {
        path: metadata_root.display().to_string(),
        reason,
    };

    if !metadata_root.is_dir() {
        return Err(unreadable("not a directory".to_string()));
    }

    let mut slugs = Vec::new();
    for entry in WalkDir::new(metadata_root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| unreadable(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(METADATA_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            slugs.push(stem.to_string());
        }
    }

    slugs.sort();
    Ok(slugs)
}

fn read_failed(path: &Path, err: &std::io::Error) -> MergeError {
    MergeError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Write `contents` to `target` through a temp file in `dir`, replacing any
/// existing file in one rename
fn write_replacing(target: &Path, dir: &Path, contents: &[u8]) -> Result<()> {
    let write_failed = |e: std::io::Error| MergeError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(contents).map_err(write_failed)?;
    tmp.persist(target).map_err(|e| write_failed(e.error))?;
    Ok(())
}
