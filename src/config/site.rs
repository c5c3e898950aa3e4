//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable consulted when no image-search key is configured
pub const PEXELS_API_KEY_ENV: &str = "PEXELS_API_KEY";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub author: AuthorConfig,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Blog directory, relative to `content_dir`
    pub blog_dir: String,

    // Writing
    pub default_image: String,
    #[serde(default)]
    pub images: ImageSearchConfig,

    // Social preview
    #[serde(default)]
    pub og_image: OgImageConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Sean Erick C. Ramones".to_string(),
            url: "https://www.seancramones.com".to_string(),
            author: AuthorConfig::default(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),

            default_image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1".to_string(),
            images: ImageSearchConfig::default(),

            og_image: OgImageConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Image-search key from the config file, else from the environment.
    /// Blank values count as absent.
    pub fn pexels_api_key(&self) -> Option<String> {
        self.images
            .api_key
            .clone()
            .or_else(|| std::env::var(PEXELS_API_KEY_ENV).ok())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Author identity stamped into every regenerated blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub avatar: AvatarConfig,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Sean Erick C. Ramones".to_string(),
            avatar: AvatarConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub src: String,
    pub alt: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            src: "avatars/profile-image-1.png".to_string(),
            alt: "Sean Erick C. Ramones".to_string(),
        }
    }
}

/// Image-search (Pexels) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub per_page: u32,
    /// Highest results page picked at random
    pub max_page: u32,
    pub timeout_secs: u64,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.pexels.com/v1/search".to_string(),
            per_page: 15,
            max_page: 10,
            timeout_secs: 10,
        }
    }
}

/// Open Graph image layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OgImageConfig {
    pub width: u32,
    pub height: u32,
    /// Profile photo, relative to `public_dir`
    pub profile_image: String,
    /// Output file, relative to `public_dir`
    pub output: String,
    pub name: String,
    pub role: String,
    pub tagline: String,
    /// Shown at the bottom; defaults to the site url without scheme
    pub site_label: Option<String>,
    pub accent_color: String,
}

impl Default for OgImageConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            profile_image: "avatars/profile-image-1.png".to_string(),
            output: "og-image.png".to_string(),
            name: "Sean Erick C. Ramones".to_string(),
            role: "Full-Stack Software Engineer".to_string(),
            tagline: "Vue.js · Nuxt · TypeScript · Modern Web".to_string(),
            site_label: None,
            accent_color: "#10b981".to_string(),
        }
    }
}
