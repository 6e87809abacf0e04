//! Article model
//!
//! An article is identified by a slug shared by `<slug>.yaml` (metadata) and
//! `<slug>.md` (body). The merged output prepends a restricted projection of
//! the metadata as YAML front matter to the untouched body.

mod document;
mod metadata;

pub use document::{compose, serialize_front_matter};
pub use metadata::{ArticleMetadata, KNOWN_ARTICLE_TYPES};
