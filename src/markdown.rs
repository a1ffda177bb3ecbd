//! Markdown rendering for the restricted dialect used in blog posts.
//!
//! This module implements the dialect as a two-phase pipeline: a
//! line-oriented block classifier followed by per-block rendering with
//! inline transforms. It deliberately avoids a chain of global text
//! substitutions so that emitted markup is never re-scanned.

mod block;
mod inline;
mod renderer;

pub use renderer::MarkdownRenderer;
