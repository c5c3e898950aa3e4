//! Content module - front matter, metadata heuristics and content discovery

pub mod extract;
mod frontmatter;
pub mod loader;
mod regenerate;

pub use frontmatter::{BlogFrontMatter, Document, FrontMatter, DELIMITER};
pub use loader::{ContentEntry, ContentLoader};
pub use regenerate::{RegenOptions, Regenerated, Regenerator};
