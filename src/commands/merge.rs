//! Merge command implementation

use std::path::PathBuf;

use crate::cli::MergeArgs;
use crate::config::{DirOverrides, MergeConfig};
use crate::error::Result;
use crate::merger::ArticleMerger;
use crate::ui::ConsoleReporter;

/// Run merge command. Returns the process exit code.
///
/// Skipped articles only change the exit code under `--strict`.
pub fn run(workspace: Option<PathBuf>, verbose: bool, quiet: bool, args: MergeArgs) -> Result<i32> {
    let workspace = super::resolve_workspace(workspace)?;
    let overrides = DirOverrides {
        metadata_dir: args.metadata_dir,
        articles_dir: args.articles_dir,
        output_dir: args.output_dir,
    };
    let config = MergeConfig::load(&workspace, &overrides)?;
    let mut merger = ArticleMerger::new(config, ConsoleReporter::new(verbose, quiet));

    let all_merged = match args.slug {
        Some(slug) if !args.all => merger.merge_one(&slug),
        _ => merger.merge_all()?.failed() == 0,
    };

    Ok(if args.strict && !all_merged { 1 } else { 0 })
}
