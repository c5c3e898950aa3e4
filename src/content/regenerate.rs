//! Blog front-matter regeneration

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::Path;

use super::extract;
use super::frontmatter::{BlogFrontMatter, Document};
use crate::config::{AuthorConfig, SiteConfig};
use crate::images::{ImageOrigin, ImageResolver};

/// Everything the regenerator needs that is not in the post itself
#[derive(Debug, Clone)]
pub struct RegenOptions {
    pub author: AuthorConfig,
    /// Used when no paragraph qualifies as a description
    pub fallback_description: String,
    /// Date used when neither the body nor the old block has one
    pub today: NaiveDate,
    /// Look up a new image even when the post already has one
    pub refresh_images: bool,
}

impl RegenOptions {
    pub fn from_config(config: &SiteConfig, refresh_images: bool) -> Self {
        Self {
            author: config.author.clone(),
            fallback_description: format!("A blog post by {}", config.author.name),
            today: Local::now().date_naive(),
            refresh_images,
        }
    }
}

/// Outcome for one post
#[derive(Debug, Clone)]
pub struct Regenerated {
    pub front_matter: BlogFrontMatter,
    pub image_origin: ImageOrigin,
    /// Full new file content
    pub content: String,
}

pub struct Regenerator {
    options: RegenOptions,
    images: ImageResolver,
}

impl Regenerator {
    pub fn new(options: RegenOptions, images: ImageResolver) -> Self {
        Self { options, images }
    }

    pub fn options(&self) -> &RegenOptions {
        &self.options
    }

    /// Compute the new content for a post. `name` is the fallback title.
    pub async fn regenerate(&self, name: &str, content: &str) -> Regenerated {
        let doc = Document::parse(content);
        let body = doc.body;

        let title = extract::extract_title(body)
            .or_else(|| doc.field("title").map(str::to_string))
            .unwrap_or_else(|| name.to_string());
        let description = extract::extract_description(body)
            .unwrap_or_else(|| self.options.fallback_description.clone());
        let date = extract::resolve_date(body, doc.field("date"), self.options.today);
        let min_read = extract::estimate_read_time(body);
        let image = self
            .images
            .resolve(&title, doc.field("image"), self.options.refresh_images)
            .await;

        let front_matter = BlogFrontMatter {
            title,
            description,
            date,
            image: image.url,
            min_read,
            author: self.options.author.clone(),
        };
        let content = front_matter.apply(body);

        Regenerated {
            front_matter,
            image_origin: image.origin,
            content,
        }
    }

    /// Regenerate a post file in place
    pub async fn regenerate_file(&self, path: &Path) -> Result<Regenerated> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled");

        let result = self.regenerate(name, &content).await;

        fs::write(path, &result.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {:?}", path);

        Ok(result)
    }
}
