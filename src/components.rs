//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the
//! listing and post pages. Components handle specific UI elements with
//! consistent styling and behavior, eliminating duplication across
//! page modules.

pub mod footer;
pub mod layout;
pub mod nav;
pub mod post_card;
