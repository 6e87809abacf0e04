//! Error types and handling for article-merge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for article-merge operations
#[derive(Error, Diagnostic, Debug)]
pub enum MergeError {
    // Article errors
    #[error("Metadata file not found: {path}")]
    #[diagnostic(
        code(article_merge::article::metadata_not_found),
        help("Each article needs a <slug>.yaml file in the metadata directory")
    )]
    MetadataNotFound { path: String },

    #[error("Article body not found: {path}")]
    #[diagnostic(
        code(article_merge::article::body_not_found),
        help("Each article needs a <slug>.md file in the articles directory")
    )]
    BodyNotFound { path: String },

    #[error("Failed to parse metadata file: {path}: {reason}")]
    #[diagnostic(code(article_merge::article::malformed_metadata))]
    MalformedMetadata { path: String, reason: String },

    #[error("Metadata for '{slug}' has no topics list")]
    #[diagnostic(
        code(article_merge::article::missing_topics),
        help("Add a 'topics' sequence to the metadata file, e.g. topics: [rust]")
    )]
    MissingTopics { slug: String },

    #[error("Failed to serialize front matter: {reason}")]
    #[diagnostic(code(article_merge::article::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("Cannot list metadata directory: {path}: {reason}")]
    #[diagnostic(
        code(article_merge::article::metadata_dir_unreadable),
        help("Check --metadata-dir or the metadata_dir entry in article-merge.yaml")
    )]
    MetadataDirUnreadable { path: String, reason: String },

    #[error("Failed to encode {what} as {format}: {reason}")]
    #[diagnostic(code(article_merge::output::encode_failed))]
    EncodeFailed {
        what: String,
        format: String,
        reason: String,
    },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(article_merge::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(article_merge::config::parse_failed),
        help("Recognized keys: metadata_dir, articles_dir, output_dir")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Timeline errors
    #[error("Failed to read section file: {path}: {reason}")]
    #[diagnostic(code(article_merge::timeline::read_failed))]
    TimelineReadFailed { path: String, reason: String },

    #[error("Failed to parse section file: {path}: {reason}")]
    #[diagnostic(
        code(article_merge::timeline::parse_failed),
        help("Expected a list of sections with title, content and duration")
    )]
    TimelineParseFailed { path: String, reason: String },

    #[error("Invalid section #{index} ('{title}'): {reason}")]
    #[diagnostic(code(article_merge::timeline::invalid_section))]
    InvalidSection {
        index: usize,
        title: String,
        reason: String,
    },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(article_merge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(article_merge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(article_merge::fs::io_error))]
    IoError { message: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MergeError>;
