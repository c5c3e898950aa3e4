//! Front-matter splitting, scanning and rendering

use anyhow::{Context, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::config::AuthorConfig;
use crate::helpers::date::format_date;

/// Line that opens and closes a front-matter block
pub const DELIMITER: &str = "---";

lazy_static! {
    static ref TOP_LEVEL_KEY: Regex = Regex::new(r"^(\w+):\s*(.*)$").unwrap();
}

/// A markdown document split into its front-matter block and body
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub front_matter: Option<FrontMatter>,
    /// Everything after the closing delimiter line, untouched
    pub body: &'a str,
}

impl<'a> Document<'a> {
    /// Split a document. Content without a well-formed leading block is all body.
    pub fn parse(content: &'a str) -> Self {
        match split_block(content) {
            Some((block, body)) if looks_like_yaml(block) => Self {
                front_matter: Some(FrontMatter::parse(block)),
                body,
            },
            _ => Self {
                front_matter: None,
                body: content,
            },
        }
    }

    /// Value of a top-level key in the existing block, if any
    pub fn field(&self, key: &str) -> Option<&str> {
        self.front_matter.as_ref().and_then(|fm| fm.get(key))
    }
}

/// Locate `---\n<block>---\n` at the very start of the content
fn split_block(content: &str) -> Option<(&str, &str)> {
    let first_end = content.find('\n')?;
    if content[..first_end].trim_end_matches('\r') != DELIMITER {
        return None;
    }
    let rest = &content[first_end + 1..];

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// A leading `---` can also be a thematic break. Only treat the block as
/// front matter when it is empty or has at least one `key:` line.
fn looks_like_yaml(block: &str) -> bool {
    if block.trim().is_empty() {
        return true;
    }
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        match trimmed.find(':') {
            Some(colon_pos) => {
                let key = &trimmed[..colon_pos];
                let after = &trimmed[colon_pos + 1..];
                !key.is_empty()
                    && key
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                    && !matches!(key, "http" | "https" | "ftp")
                    && (after.is_empty() || after.starts_with(' '))
            }
            None => false,
        }
    })
}

/// Raw front-matter block plus a flat view of its top-level scalar keys
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    raw: String,
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Read the top-level scalar keys of the block. Nested keys are skipped;
    /// the full structure is available through [`FrontMatter::to_yaml`].
    /// A block that is not valid YAML is scanned line by line instead.
    pub fn parse(raw: &str) -> Self {
        let fields = match serde_yaml::from_str::<Value>(raw) {
            Ok(Value::Mapping(map)) => scalar_fields(&map),
            _ => scan_fields(raw),
        };
        Self {
            raw: raw.to_string(),
            fields,
        }
    }

    /// Non-empty value of a top-level key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn image(&self) -> Option<&str> {
        self.get("image")
    }

    /// The block text without delimiters
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Full YAML structure of the block
    pub fn to_yaml(&self) -> Result<Value> {
        if self.raw.trim().is_empty() {
            return Ok(Value::Mapping(Mapping::new()));
        }
        serde_yaml::from_str(&self.raw).context("Failed to parse YAML front-matter")
    }
}

fn scalar_fields(map: &Mapping) -> IndexMap<String, String> {
    map.iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.as_str()?.to_string(), value))
        })
        .collect()
}

fn scan_fields(raw: &str) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();
    for line in raw.lines() {
        if let Some(caps) = TOP_LEVEL_KEY.captures(line.trim_end_matches('\r')) {
            fields.insert(caps[1].to_string(), unquote(caps[2].trim_end()));
        }
    }
    fields
}

fn unquote(value: &str) -> String {
    let len = value.len();
    if len >= 2 && value.starts_with('"') && value.ends_with('"') {
        let mut out = String::with_capacity(len);
        let mut chars = value[1..len - 1].chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        out
    } else if len >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        value[1..len - 1].replace("''", "'")
    } else {
        value.to_string()
    }
}

/// Double-quoted YAML scalar
pub fn quoted(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t");
    format!("\"{}\"", escaped)
}

/// Emit `value` bare when YAML would read it back as the same string,
/// otherwise quote it.
pub fn scalar(value: &str) -> String {
    match serde_yaml::from_str::<Value>(value) {
        Ok(Value::String(ref parsed)) if parsed == value && !value.contains('\n') => {
            value.to_string()
        }
        _ => quoted(value),
    }
}

/// The block the regenerator writes for a blog post
#[derive(Debug, Clone, PartialEq)]
pub struct BlogFrontMatter {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub image: String,
    pub min_read: u32,
    pub author: AuthorConfig,
}

impl BlogFrontMatter {
    /// Render the block, delimiters included, without a trailing newline
    pub fn render(&self) -> String {
        format!(
            "{delim}
title: {title}
description: {description}
date: {date}
image: {image}
minRead: {min_read}
author:
  name: {name}
  avatar:
    src: {src}
    alt: {alt}
{delim}",
            delim = DELIMITER,
            title = quoted(&self.title),
            description = scalar(&self.description),
            date = format_date(&self.date),
            image = scalar(&self.image),
            min_read = self.min_read,
            name = scalar(&self.author.name),
            src = scalar(&self.author.avatar.src),
            alt = scalar(&self.author.avatar.alt),
        )
    }

    /// Replace whatever block `body` had with this one
    pub fn apply(&self, body: &str) -> String {
        format!("{}\n{}", self.render(), body)
    }
}
