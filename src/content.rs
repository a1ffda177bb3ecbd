//! Flat-file blog content: front matter parsing and the post store.
//!
//! Posts live under `<content-dir>/<lang>/<slug>.md` with a
//! `---` fenced YAML header for metadata. The store scans the tree
//! once and serves lookups by language and slug.

mod front_matter;
mod store;

pub use front_matter::FrontMatter;
pub use store::{ContentStore, Post, PostMeta};
