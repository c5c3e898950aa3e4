//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::schema::{BlogPost, ContentKind, ContentRecord, Project};
use crate::Site;

/// Valid blog posts, newest first
pub fn posts(site: &Site) -> Result<Vec<BlogPost>> {
    let mut posts: Vec<BlogPost> = records(site, ContentKind::BlogPost)?
        .into_iter()
        .filter_map(|r| match r {
            ContentRecord::BlogPost(post) => Some(post),
            _ => None,
        })
        .collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(posts)
}

/// Valid projects, newest first
pub fn projects(site: &Site) -> Result<Vec<Project>> {
    let mut projects: Vec<Project> = records(site, ContentKind::Project)?
        .into_iter()
        .filter_map(|r| match r {
            ContentRecord::Project(project) => Some(project),
            _ => None,
        })
        .collect();
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(projects)
}

fn records(site: &Site, kind: ContentKind) -> Result<Vec<ContentRecord>> {
    let loader = ContentLoader::new(site);
    let mut records = Vec::new();
    for entry in loader.discover()?.iter().filter(|e| e.kind == kind) {
        match loader.load(entry) {
            Ok(Ok(record)) => records.push(record),
            Ok(Err(invalid)) => tracing::warn!("Skipping {}: {}", entry.source, invalid),
            Err(e) => tracing::warn!("Skipping {}: {:#}", entry.source, e),
        }
    }
    Ok(records)
}

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = posts(site)?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} ({} min read)",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.min_read
                );
            }
        }
        "project" | "projects" => {
            let projects = projects(site)?;
            println!("Projects ({}):", projects.len());
            for project in projects {
                println!(
                    "  {} - {} [{}]",
                    project.date.format("%Y-%m-%d"),
                    project.title,
                    project.tags.join(", ")
                );
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, project", content_type);
        }
    }

    Ok(())
}
