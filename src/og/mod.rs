//! Open Graph preview image
//!
//! The whole card is one SVG document: gradient background, grid, accent
//! glow, the profile photo (embedded as a data URI and cropped to cover) and
//! the text layers. It is rasterised to PNG at the configured size.

use anyhow::{Context, Result};
use base64::Engine;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OgImageConfig;
use crate::Site;

/// Side of the square profile photo
const PHOTO_SIZE: u32 = 280;
const PHOTO_LEFT: u32 = 140;
const PHOTO_TOP: u32 = 175;
const TEXT_LEFT: u32 = 500;

/// What was written
#[derive(Debug, Clone)]
pub struct OgReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

/// Escape text for use inside SVG markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// MIME type of a raster image, judged by extension
fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Text shown in the bottom corner: configured label, else the bare host
pub fn site_label(config: &OgImageConfig, url: &str) -> String {
    config.site_label.clone().unwrap_or_else(|| {
        url.trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string()
    })
}

/// SVG markup of the card. `photo_href` is any href usvg can resolve.
pub fn build_svg(config: &OgImageConfig, label: &str, photo_href: &str) -> String {
    let (w, h) = (config.width, config.height);
    let accent = escape(&config.accent_color);
    let font = "system-ui, -apple-system, sans-serif";

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#0a0a0a"/>
      <stop offset="50%" stop-color="#1a1a1a"/>
      <stop offset="100%" stop-color="#0a0a0a"/>
    </linearGradient>
    <pattern id="grid" width="40" height="40" patternUnits="userSpaceOnUse">
      <path d="M 40 0 L 0 0 0 40" fill="none" stroke="#ffffff" stroke-opacity="0.03" stroke-width="1"/>
    </pattern>
    <radialGradient id="accent">
      <stop offset="0%" stop-color="{accent}" stop-opacity="0.2"/>
      <stop offset="100%" stop-color="{accent}" stop-opacity="0"/>
    </radialGradient>
  </defs>
  <rect width="{w}" height="{h}" fill="url(#grad)"/>
  <rect width="{w}" height="{h}" fill="url(#grid)"/>
  <circle cx="900" cy="150" r="300" fill="url(#accent)"/>
  <image x="{px}" y="{py}" width="{ps}" height="{ps}" preserveAspectRatio="xMidYMid slice" xlink:href="{photo}"/>
  <text x="{tx}" y="280" font-family="{font}" font-size="45" font-weight="700" fill="#ffffff">{name}</text>
  <text x="{tx}" y="340" font-family="{font}" font-size="32" font-weight="400" fill="{accent}">{role}</text>
  <text x="{tx}" y="390" font-family="{font}" font-size="24" font-weight="400" fill="#a3a3a3">{tagline}</text>
  <text x="{tx}" y="550" font-family="system-ui, -apple-system, monospace" font-size="20" font-weight="500" fill="#737373">{label}</text>
</svg>"##,
        px = PHOTO_LEFT,
        py = PHOTO_TOP,
        ps = PHOTO_SIZE,
        tx = TEXT_LEFT,
        photo = escape(photo_href),
        name = escape(&config.name),
        role = escape(&config.role),
        tagline = escape(&config.tagline),
        label = escape(label),
    )
}

/// Rasterise SVG markup to PNG bytes of exactly `width` x `height`
pub fn render_png(svg: &str, width: u32, height: u32) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).context("Failed to parse OG image SVG")?;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .with_context(|| format!("Invalid image size {}x{}", width, height))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().context("Failed to encode PNG")
}

/// Profile photo as a base64 data URI
fn photo_data_uri(path: &Path) -> Result<String> {
    let mime = image_mime(path)
        .with_context(|| format!("Unsupported profile image type: {}", path.display()))?;
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read profile image {}", path.display()))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

/// Render the card for a site and write it under the public directory
pub fn generate(site: &Site) -> Result<OgReport> {
    let config = &site.config.og_image;
    let photo_path = site.public_dir.join(&config.profile_image);
    let output = site.public_dir.join(&config.output);

    let photo = photo_data_uri(&photo_path)?;
    let svg = build_svg(config, &site_label(config, &site.config.url), &photo);
    let png = render_png(&svg, config.width, config.height)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, &png).with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::debug!("Wrote {} bytes to {:?}", png.len(), output);

    Ok(OgReport {
        path: output,
        width: config.width,
        height: config.height,
        bytes: png.len() as u64,
    })
}
