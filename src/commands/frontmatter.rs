//! Regenerate blog post front matter

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::content::{ContentLoader, RegenOptions, Regenerated, Regenerator};
use crate::helpers::date::format_date;
use crate::images::ImageResolver;
use crate::Site;

/// Flag that forces a new image lookup for every post
pub const REFRESH_IMAGES_FLAG: &str = "--refresh-images";

/// Arguments of the `frontmatter` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterArgs {
    pub file: Option<PathBuf>,
    pub refresh_images: bool,
}

impl FrontmatterArgs {
    /// Unknown `--flags` are dropped; the first remaining argument is the file
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == REFRESH_IMAGES_FLAG {
                parsed.refresh_images = true;
            } else if arg.starts_with("--") {
                tracing::debug!("Ignoring unknown flag {}", arg);
            } else if parsed.file.is_none() {
                parsed.file = Some(PathBuf::from(arg));
            }
        }
        parsed
    }
}

/// Run the frontmatter command on one file, or on every post when `file` is None
pub async fn run(site: &Site, file: Option<&Path>, refresh_images: bool) -> Result<()> {
    let regenerator = Regenerator::new(
        RegenOptions::from_config(&site.config, refresh_images),
        ImageResolver::from_config(&site.config),
    );

    match file {
        Some(file) => {
            let path = if file.is_absolute() {
                file.to_path_buf()
            } else {
                site.base_dir.join(file)
            };
            if !path.is_file() {
                anyhow::bail!("File not found: {}", path.display());
            }
            let result = regenerate_one(&regenerator, &path).await?;
            report(&path, &result);
        }
        None => {
            let posts = ContentLoader::new(site).blog_posts()?;
            println!("Processing {} blog posts...", posts.len());

            let mut failures = Vec::new();
            for path in &posts {
                match regenerate_one(&regenerator, path).await {
                    Ok(result) => report(path, &result),
                    Err(e) => {
                        tracing::error!("Failed to update {:?}: {:#}", path, e);
                        failures.push(path);
                    }
                }
            }

            let updated = posts.len() - failures.len();
            println!("\nDone! Updated {} posts.", updated);
            if !failures.is_empty() {
                anyhow::bail!("{} of {} posts could not be updated", failures.len(), posts.len());
            }
        }
    }

    Ok(())
}

async fn regenerate_one(regenerator: &Regenerator, path: &Path) -> Result<Regenerated> {
    tracing::info!("Processing {:?}", path);
    regenerator.regenerate_file(path).await
}

fn report(path: &Path, result: &Regenerated) {
    let fm = &result.front_matter;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    println!("\nUpdated: {}", name);
    println!("   Title: {}", fm.title);
    println!("   Date: {}", format_date(&fm.date));
    println!("   Read time: {} min", fm.min_read);
    println!("   Image: {} ({})", fm.image, result.image_origin);
}
