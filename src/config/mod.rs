//! Configuration module

mod site;

pub use site::AuthorConfig;
pub use site::AvatarConfig;
pub use site::ImageSearchConfig;
pub use site::OgImageConfig;
pub use site::SiteConfig;
pub use site::PEXELS_API_KEY_ENV;
