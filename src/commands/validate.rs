//! Validate site content against the collection schema

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Site;

/// Totals from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub checked: usize,
    pub invalid: usize,
}

/// Check every content record and print each failure
pub fn check(site: &Site) -> Result<ValidationSummary> {
    let loader = ContentLoader::new(site);
    let entries = loader.discover()?;
    let mut summary = ValidationSummary::default();

    for entry in &entries {
        summary.checked += 1;
        match loader.load(entry) {
            Ok(Ok(record)) => {
                tracing::debug!("{} ok ({})", entry.source, record.kind());
            }
            Ok(Err(invalid)) => {
                summary.invalid += 1;
                println!("{} ({}):", entry.source, entry.kind);
                for error in &invalid.errors {
                    println!("  {}", error);
                }
            }
            Err(e) => {
                summary.invalid += 1;
                println!("{} ({}):", entry.source, entry.kind);
                println!("  {:#}", e);
            }
        }
    }

    Ok(summary)
}

/// Run the validate command; fails when any record is invalid
pub fn run(site: &Site) -> Result<()> {
    let summary = check(site)?;
    println!(
        "Checked {} records, {} invalid.",
        summary.checked, summary.invalid
    );
    if summary.invalid > 0 {
        anyhow::bail!("{} content records failed validation", summary.invalid);
    }
    Ok(())
}
