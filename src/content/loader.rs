//! Content loader - finds content records under the content directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Document;
use crate::schema::{self, ContentKind, ContentRecord, ValidationError};
use crate::Site;

/// A content file and the kind of record it holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub kind: ContentKind,
    /// Full path
    pub path: PathBuf,
    /// Path relative to the content directory
    pub source: String,
}

/// Loads content records from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Every content file the site reads, grouped by collection
    pub fn discover(&self) -> Result<Vec<ContentEntry>> {
        let mut entries = Vec::new();

        for (file, kind) in [
            ("index.yml", ContentKind::Home),
            ("about.yml", ContentKind::About),
            ("projects.yml", ContentKind::Listing),
            ("blog.yml", ContentKind::Listing),
        ] {
            let path = self.site.content_dir.join(file);
            if path.is_file() {
                entries.push(self.entry(kind, path));
            }
        }

        let pattern = self.site.content_dir.join("projects").join("*.yml");
        let pattern = pattern.to_string_lossy();
        let mut projects: Vec<PathBuf> = glob::glob(&pattern)
            .with_context(|| format!("Invalid project pattern {}", pattern))?
            .filter_map(|p| p.ok())
            .filter(|p| p.is_file())
            .collect();
        projects.sort();
        entries.extend(
            projects
                .into_iter()
                .map(|p| self.entry(ContentKind::Project, p)),
        );

        entries.extend(
            self.blog_posts()?
                .into_iter()
                .map(|p| self.entry(ContentKind::BlogPost, p)),
        );

        Ok(entries)
    }

    /// Markdown files directly inside the blog directory, sorted by name
    pub fn blog_posts(&self) -> Result<Vec<PathBuf>> {
        let blog_dir = &self.site.blog_dir;
        if !blog_dir.exists() {
            tracing::warn!("Blog directory {:?} does not exist", blog_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(blog_dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("Failed to list {}", blog_dir.display()))?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                posts.push(path.to_path_buf());
            }
        }
        posts.sort();
        Ok(posts)
    }

    /// Raw YAML value of a content file. For markdown this is its front matter.
    pub fn read(&self, entry: &ContentEntry) -> Result<serde_yaml::Value> {
        let content = fs::read_to_string(&entry.path)
            .with_context(|| format!("Failed to read {}", entry.path.display()))?;

        let value = match entry.kind {
            ContentKind::BlogPost => match Document::parse(&content).front_matter {
                Some(fm) => fm.to_yaml()?,
                None => serde_yaml::Value::Mapping(Default::default()),
            },
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", entry.source))?,
        };
        Ok(value)
    }

    /// Read and validate one entry. The outer error is IO or syntax; the
    /// inner one is a schema failure.
    pub fn load(&self, entry: &ContentEntry) -> Result<Result<ContentRecord, ValidationError>> {
        let value = self.read(entry)?;
        Ok(schema::validate(entry.kind, &value))
    }

    fn entry(&self, kind: ContentKind, path: PathBuf) -> ContentEntry {
        let source = path
            .strip_prefix(&self.site.content_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();
        ContentEntry { kind, path, source }
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_with(files: &[(&str, &str)]) -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            let path = dir.path().join("content").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[test]
    fn test_discover_groups_by_collection() {
        let (_dir, site) = site_with(&[
            ("index.yml", "title: x\n"),
            ("blog.yml", "title: x\n"),
            ("projects/b.yml", "title: x\n"),
            ("projects/a.yml", "title: x\n"),
            ("projects/notes.txt", "ignored"),
            ("blog/second.md", "# Second\n"),
            ("blog/first.md", "# First\n"),
            ("blog/draft.txt", "ignored"),
            ("blog/nested/deep.md", "# Nested\n"),
        ]);

        let entries = ContentLoader::new(&site).discover().unwrap();
        let found: Vec<(ContentKind, &str)> = entries
            .iter()
            .map(|e| (e.kind, e.source.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (ContentKind::Home, "index.yml"),
                (ContentKind::Listing, "blog.yml"),
                (ContentKind::Project, "projects/a.yml"),
                (ContentKind::Project, "projects/b.yml"),
                (ContentKind::BlogPost, "blog/first.md"),
                (ContentKind::BlogPost, "blog/second.md"),
            ]
        );
    }

    #[test]
    fn test_missing_blog_dir_is_empty() {
        let (_dir, site) = site_with(&[("index.yml", "title: x\n")]);
        assert!(ContentLoader::new(&site).blog_posts().unwrap().is_empty());
    }

    #[test]
    fn test_load_blog_post_front_matter() {
        let (_dir, site) = site_with(&[(
            "blog/post.md",
            "---\ntitle: \"Post\"\ndescription: About things\ndate: 2024-10-01\nimage: https://img.example/a.jpg\nminRead: 2\nauthor:\n  name: Sean\n---\nBody\n",
        )]);
        let loader = ContentLoader::new(&site);
        let entries = loader.discover().unwrap();
        let record = loader.load(&entries[0]).unwrap().unwrap();
        assert_eq!(record.title(), "Post");
    }

    #[test]
    fn test_load_reports_validation_and_syntax_errors() {
        let (_dir, site) = site_with(&[
            ("about.yml", "title: About\n"),
            ("projects/broken.yml", "title: [unclosed\n"),
        ]);
        let loader = ContentLoader::new(&site);
        let entries = loader.discover().unwrap();

        let invalid = loader.load(&entries[0]).unwrap().unwrap_err();
        assert!(invalid.paths().contains(&"description"));

        assert!(loader.load(&entries[1]).is_err());
    }
}
