//! Version command implementation

use std::fmt::Write;
use std::path::Path;

use crate::config::{BODY_EXTENSION, CONFIG_FILE, METADATA_EXTENSION, MergeConfig};
use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

/// Version line followed by the default layout the merger works against
fn render() -> String {
    let defaults = MergeConfig::with_workspace(Path::new(""));
    let mut out = format!("article-merge {}\n\n", env!("CARGO_PKG_VERSION"));

    let _ = writeln!(out, "Default layout:");
    let _ = writeln!(
        out,
        "  metadata: {}/<slug>.{}",
        defaults.metadata_root.display(),
        METADATA_EXTENSION
    );
    let _ = writeln!(
        out,
        "  bodies:   {}/<slug>.{}",
        defaults.articles_root.display(),
        BODY_EXTENSION
    );
    let _ = writeln!(
        out,
        "  output:   {}/<slug>.{}",
        defaults.output_root.display(),
        BODY_EXTENSION
    );
    let _ = writeln!(out, "  config:   {} (optional)", CONFIG_FILE);
    out
}
