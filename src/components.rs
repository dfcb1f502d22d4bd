//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the index
//! and article pages. Components handle specific UI elements with
//! consistent styling, eliminating duplication across page generators.

pub mod article_card;
pub mod footer;
pub mod keywords;
pub mod layout;
