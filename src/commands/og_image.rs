//! Generate the Open Graph preview image

use anyhow::Result;

use crate::og;
use crate::Site;

/// Render the card and print where it went
pub fn run(site: &Site) -> Result<()> {
    tracing::info!("Generating Open Graph image...");
    let report = og::generate(site)?;

    println!("Success! OG image generated at:");
    println!("   {}", report.path.display());
    println!("\nDimensions: {}x{}px", report.width, report.height);
    println!("Size: {:.2} KB", report.bytes as f64 / 1024.0);

    Ok(())
}
