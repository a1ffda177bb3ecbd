//! Static site generator for a localized agency blog.

mod assets;
pub mod components;
mod config;
mod content;
mod faq;
mod i18n;
mod markdown;
mod namecheck;
pub mod pages;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use content::{ContentStore, FrontMatter, Post, PostMeta};
pub use faq::FaqBot;
pub use i18n::{BLOG_LOCALES, DEFAULT_LOCALE, Dictionary, Locale};
pub use markdown::MarkdownRenderer;
pub use namecheck::{NameCheck, check_availability, clean_name};
pub use util::{format_date, reading_time};
