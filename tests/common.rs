//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary blog content trees
//! used across multiple test files.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates temporary content directory with language subdirectories.
///
/// Sets up the layout `ContentStore::load` expects: one subdirectory
/// per blog language, initially empty.
///
/// # Returns
///
/// Temporary directory containing `en/` and `fr/` subdirectories
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_content_tree() -> Result<TempDir> {
    let dir = TempDir::new()?;

    fs::create_dir(dir.path().join("en"))?;
    fs::create_dir(dir.path().join("fr"))?;

    Ok(dir)
}

/// Writes a blog post under the given language subdirectory.
///
/// # Arguments
///
/// * `root`: Content root containing the language subdirectories
/// * `lang`: Language code, `en` or `fr`
/// * `slug`: File stem, becomes the post slug
/// * `content`: Raw file content including YAML front matter
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_post(root: &Path, lang: &str, slug: &str, content: &str) -> Result<()> {
    let dir = root.join(lang);
    fs::create_dir_all(&dir)?;
    fs::write(dir.join(format!("{slug}.md")), content)?;

    Ok(())
}

/// Builds a minimal post file with front matter and the given body.
pub fn post_source(title: &str, date: &str, body: &str) -> String {
    format!("---\ntitle: {title}\ndate: \"{date}\"\n---\n{body}")
}
