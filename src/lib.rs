//! Static site generator for simplified research article summaries.

pub mod article;
mod assets;
pub mod components;
mod config;
pub mod markdown;
pub mod pages;
mod site;

pub use article::{Article, ProcessingStatus, load_articles, parse_articles};
pub use assets::write_css_assets;
pub use config::{Config, DEFAULT_SITE_NAME};
pub use markdown::{Fragment, Node};
pub use site::{SiteSummary, generate_site, write_site};
