//! Subcommand implementations

pub mod frontmatter;
pub mod list;
pub mod og_image;
pub mod validate;
