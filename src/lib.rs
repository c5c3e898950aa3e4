//! folio: authoring tools for a portfolio and blog site
//!
//! This crate checks site content against its collection schema, rebuilds
//! blog front matter from exported notes, and renders the Open Graph preview
//! image.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod images;
pub mod og;
pub mod schema;

use anyhow::Result;
use std::path::Path;

/// Site configuration file at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// A site checkout and its resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory
    pub content_dir: std::path::PathBuf,
    /// Blog posts directory
    pub blog_dir: std::path::PathBuf,
    /// Public (static assets) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Open a site rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an already loaded configuration
    pub fn with_config(base_dir: std::path::PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let blog_dir = content_dir.join(&config.blog_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            blog_dir,
            public_dir,
        }
    }

    /// Regenerate blog front matter
    pub async fn regenerate(&self, file: Option<&Path>, refresh_images: bool) -> Result<()> {
        commands::frontmatter::run(self, file, refresh_images).await
    }

    /// Validate every content record
    pub fn validate(&self) -> Result<()> {
        commands::validate::run(self)
    }

    /// Render the Open Graph image
    pub fn og_image(&self) -> Result<()> {
        commands::og_image::run(self)
    }
}
