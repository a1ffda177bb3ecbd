use anyhow::{Context, Result};
use medina::{
    BLOG_LOCALES, Config, ContentStore, Dictionary, MarkdownRenderer, PostMeta, pages,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let pages_written = generate_site(&config)?;

    println!(
        "Done: {} pages in {}",
        pages_written,
        config.output.display()
    );

    if config.open {
        let index = config.output.join("index.html");
        open::that(&index)
            .with_context(|| format!("Failed to open {} in browser", index.display()))?;
    }

    Ok(())
}

/// Generates the whole site into the configured output directory.
///
/// Writes the CSS bundles, the listing page with its per-language
/// variants, and one page per post. Posts sharing a slug across
/// languages resolve to a single page, English winning as in the slug
/// lookup order.
///
/// # Arguments
///
/// * `config`: Validated command line configuration
///
/// # Returns
///
/// Number of HTML pages written
///
/// # Errors
///
/// Returns error if content loading, dictionary parsing or any file
/// write fails
fn generate_site(config: &Config) -> Result<usize> {
    let store = ContentStore::load(&config.content).context("Failed to load blog content")?;

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    medina::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let chrome = Dictionary::load(config.chrome_locale()?)
        .context("Failed to load chrome dictionary")?;

    let mut pages_written = 0;

    // Full listing plus one filtered variant per blog language
    let all_posts: Vec<&PostMeta> = store.posts().iter().map(|post| &post.meta).collect();
    let listing = pages::index::generate_listing(&config.name, &chrome, &all_posts, None);
    write_page(&config.output.join("index.html"), listing)?;
    pages_written += 1;

    for locale in BLOG_LOCALES {
        let metas: Vec<&PostMeta> = store
            .by_language(*locale)
            .into_iter()
            .map(|post| &post.meta)
            .collect();
        let listing =
            pages::index::generate_listing(&config.name, &chrome, &metas, Some(*locale));
        write_page(
            &config.output.join(format!("{}.html", locale.code())),
            listing,
        )?;
        pages_written += 1;
    }

    println!(
        "Generated: {} ({} posts)",
        config.output.join("index.html").display(),
        store.len()
    );

    let blog_dir = config.output.join("blog");
    fs::create_dir_all(&blog_dir).context("Failed to create blog directory")?;

    let renderer = MarkdownRenderer::new();
    let mut seen_slugs = HashSet::new();

    for post in store.posts() {
        if !seen_slugs.insert(post.meta.slug.clone()) {
            continue;
        }

        // Slug collisions across languages resolve through the store
        let Some(post) = store.by_slug(&post.meta.slug) else {
            continue;
        };

        let body_html = renderer.render(&post.body);
        let dict = Dictionary::load(post.meta.lang).with_context(|| {
            format!("Failed to load dictionary for post: {}", post.meta.slug)
        })?;

        let page = pages::post::generate_post(
            &config.name,
            &dict,
            post,
            &body_html,
            &config.share_url(&post.meta.slug),
        );

        let path = blog_dir.join(format!("{}.html", post.meta.slug));
        write_page(&path, page)?;
        pages_written += 1;

        println!("Generated: {}", path.display());
    }

    Ok(pages_written)
}

fn write_page(path: &Path, markup: maud::Markup) -> Result<()> {
    fs::write(path, markup.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_post(root: &Path, lang: &str, slug: &str, content: &str) {
        let dir = root.join(lang);
        fs::create_dir_all(&dir).expect("Should create language directory");
        fs::write(dir.join(format!("{}.md", slug)), content).expect("Should write post");
    }

    fn test_config(content: &Path, output: &Path) -> Config {
        Config {
            content: content.to_path_buf(),
            output: output.to_path_buf(),
            name: "Maghrib.Digital".to_string(),
            locale: "fr".to_string(),
            base_url: "https://maghrib.digital".to_string(),
            open: false,
        }
    }

    #[test]
    fn test_generate_site_empty_content() {
        // Arrange
        let content = TempDir::new().expect("Should create content dir");
        let output = TempDir::new().expect("Should create output dir");
        let config = test_config(content.path(), output.path());

        // Act
        let pages = generate_site(&config).expect("Should generate empty site");

        // Assert: listing plus the two language variants
        assert_eq!(pages, 3);
        assert!(output.path().join("index.html").exists());
        assert!(output.path().join("en.html").exists());
        assert!(output.path().join("fr.html").exists());
        assert!(output.path().join("assets/index.css").exists());
    }

    #[test]
    fn test_generate_site_writes_post_pages() {
        // Arrange
        let content = TempDir::new().expect("Should create content dir");
        let output = TempDir::new().expect("Should create output dir");
        write_post(
            content.path(),
            "en",
            "llc-guide",
            "---\ntitle: LLC Guide\ndate: \"2025-11-02\"\n---\n# Heading\n\n**Bold** body.",
        );
        let config = test_config(content.path(), output.path());

        // Act
        let pages = generate_site(&config).expect("Should generate site");

        // Assert
        assert_eq!(pages, 4);
        let post_path = output.path().join("blog/llc-guide.html");
        assert!(post_path.exists());

        let html = fs::read_to_string(post_path).expect("Should read post page");
        assert!(html.contains("<h1>Heading</h1>"), "Rendered body: {}", html);
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("LLC Guide"));
    }

    #[test]
    fn test_generate_site_deduplicates_slugs_across_languages() {
        // Arrange: same slug in both languages, English must win
        let content = TempDir::new().expect("Should create content dir");
        let output = TempDir::new().expect("Should create output dir");
        write_post(
            content.path(),
            "en",
            "guide",
            "---\ntitle: EN Guide\ndate: \"2025-01-01\"\n---\nen body",
        );
        write_post(
            content.path(),
            "fr",
            "guide",
            "---\ntitle: FR Guide\ndate: \"2025-06-01\"\n---\nfr body",
        );
        let config = test_config(content.path(), output.path());

        // Act
        let pages = generate_site(&config).expect("Should generate site");

        // Assert: three listings and one post page
        assert_eq!(pages, 4);
        let html = fs::read_to_string(output.path().join("blog/guide.html"))
            .expect("Should read post page");
        assert!(html.contains("EN Guide"), "English post shadows French");
    }

    #[test]
    fn test_generate_site_missing_content_dir_fails() {
        // Arrange
        let output = TempDir::new().expect("Should create output dir");
        let config = test_config(&PathBuf::from("/no/such/dir"), output.path());

        // Act
        let result = generate_site(&config);

        // Assert
        assert!(result.is_err(), "Missing content directory should fail");
    }
}
