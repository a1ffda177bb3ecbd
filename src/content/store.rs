//! Flat-file blog content store.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use super::front_matter;
use crate::i18n::{BLOG_LOCALES, Locale};

/// House defaults applied when front matter omits a field.
const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_AUTHOR: &str = "Maghrib.Digital";
const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_IMAGE: &str = "/blog/default.jpg";
const DEFAULT_DATE: &str = "1970-01-01";

/// Post metadata shown on listing cards and post headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub image: String,
    pub lang: Locale,
}

/// A complete post: metadata plus the raw markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub meta: PostMeta,
    pub body: String,
}

/// In-memory collection of every post under the content directory.
///
/// The content layout is `<dir>/<lang>/<slug>.md` (`.mdx` also
/// accepted) for each blog language. The tree is scanned once at load;
/// posts are held sorted newest first with slug as a tiebreaker so
/// generation order never depends on filesystem iteration order.
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Loads every post from a content directory.
    ///
    /// Missing language subdirectories are skipped. Files that are not
    /// markdown are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist, a post
    /// file cannot be read, or its front matter is not valid YAML.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("Content directory does not exist: {}", dir.display());
        }

        let mut posts = Vec::new();

        for locale in BLOG_LOCALES {
            let lang_dir = dir.join(locale.code());
            if !lang_dir.is_dir() {
                continue;
            }

            let entries = fs::read_dir(&lang_dir).with_context(|| {
                format!("Failed to read content directory: {}", lang_dir.display())
            })?;

            for entry in entries {
                let path = entry
                    .with_context(|| {
                        format!("Failed to list content in {}", lang_dir.display())
                    })?
                    .path();

                if !is_post_file(&path) {
                    continue;
                }

                let post = load_post(&path, *locale)
                    .with_context(|| format!("Failed to load post: {}", path.display()))?;
                posts.push(post);
            }
        }

        posts.sort_by(|a, b| {
            b.meta
                .date
                .cmp(&a.meta.date)
                .then_with(|| a.meta.slug.cmp(&b.meta.slug))
        });

        Ok(Self { posts })
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts written in one language, newest first.
    pub fn by_language(&self, locale: Locale) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|post| post.meta.lang == locale)
            .collect()
    }

    /// Looks up a post by slug, searching blog languages in order.
    ///
    /// An English post shadows a French post with the same slug, as in
    /// the lookup order of `BLOG_LOCALES`.
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        BLOG_LOCALES.iter().find_map(|locale| {
            self.posts
                .iter()
                .find(|post| post.meta.lang == *locale && post.meta.slug == slug)
        })
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Accepts `.md` and `.mdx` files.
fn is_post_file(path: &Path) -> bool {
    path.is_file()
        && matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("md") | Some("mdx")
        )
}

fn load_post(path: &Path, lang: Locale) -> Result<Post> {
    let raw = fs::read_to_string(path).context("Failed to read post file")?;
    let (front, body) = front_matter::parse(&raw)?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Post filename is not valid UTF8")?
        .to_string();

    Ok(Post {
        meta: PostMeta {
            slug,
            title: front.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            excerpt: front.excerpt.unwrap_or_default(),
            date: front.date.unwrap_or_else(|| DEFAULT_DATE.to_string()),
            author: front.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            category: front
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image: front.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            lang,
        },
        body: body.to_string(),
    })
}
