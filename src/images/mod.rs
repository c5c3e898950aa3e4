//! Cover-image selection for blog posts
//!
//! Posts without a cover image (or still using the site default) get a
//! topical photo from the image-search service. Any failure along the way
//! falls back to the post's current image, then to the site default.

mod pexels;

pub use pexels::{ImageSearchError, PexelsClient};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SiteConfig;

/// Where a resolved cover image came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Search,
    Existing,
    Default,
}

impl std::fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ImageOrigin::Search => "image search",
            ImageOrigin::Existing => "existing",
            ImageOrigin::Default => "default",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub url: String,
    pub origin: ImageOrigin,
}

/// Search query for a post title, picked by simple keyword matching
pub fn query_for_title(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if ["vue", "react", "javascript"]
        .iter()
        .any(|kw| title.contains(kw))
    {
        "web development coding"
    } else if title.contains("design") && title.contains("system") {
        "software architecture diagram"
    } else {
        "technology programming computer"
    }
}

/// Picks cover images, with or without an image-search client
pub struct ImageResolver {
    client: Option<PexelsClient>,
    default_image: String,
    max_page: u32,
}

impl ImageResolver {
    pub fn new(client: Option<PexelsClient>, default_image: impl Into<String>, max_page: u32) -> Self {
        Self {
            client,
            default_image: default_image.into(),
            max_page: max_page.max(1),
        }
    }

    /// Build from site config. No API key means no client and no requests.
    pub fn from_config(config: &SiteConfig) -> Self {
        let client = config.pexels_api_key().and_then(|key| {
            PexelsClient::new(key, &config.images)
                .map_err(|e| tracing::warn!("Image search disabled: {}", e))
                .ok()
        });
        if client.is_none() {
            tracing::debug!("No image-search key configured; using fallback images");
        }
        Self::new(client, config.default_image.clone(), config.images.max_page)
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Whether a post with `existing` as its image should get a new one
    pub fn needs_image(&self, existing: Option<&str>, refresh: bool) -> bool {
        match existing {
            _ if refresh => true,
            None => true,
            Some(url) => url == self.default_image,
        }
    }

    /// Cover image for a post titled `title`
    pub async fn resolve(&self, title: &str, existing: Option<&str>, refresh: bool) -> ResolvedImage {
        if self.needs_image(existing, refresh) {
            if let Some(url) = self.search(title).await {
                return ResolvedImage {
                    url,
                    origin: ImageOrigin::Search,
                };
            }
        }
        self.fallback(existing)
    }

    fn fallback(&self, existing: Option<&str>) -> ResolvedImage {
        match existing {
            Some(url) if url != self.default_image => ResolvedImage {
                url: url.to_string(),
                origin: ImageOrigin::Existing,
            },
            _ => ResolvedImage {
                url: self.default_image.clone(),
                origin: ImageOrigin::Default,
            },
        }
    }

    async fn search(&self, title: &str) -> Option<String> {
        let client = self.client.as_ref()?;
        let query = query_for_title(title);
        let page = rand::thread_rng().gen_range(1..=self.max_page);

        match client.search(query, page).await {
            Ok(urls) => {
                let picked = urls.choose(&mut rand::thread_rng()).cloned();
                if picked.is_none() {
                    tracing::warn!("Image search for {:?} returned no photos", query);
                }
                picked
            }
            Err(e) => {
                tracing::warn!("Image search failed for {:?}: {}", title, e);
                None
            }
        }
    }
}
