//! The `healthbasics validate` command.

use std::path::PathBuf;

use anyhow::Result;

use healthbasics_core::catalog::{validate_catalog, ContentCatalog};

pub fn execute(content: Option<PathBuf>) -> Result<()> {
    let catalog = ContentCatalog::load(content.as_deref())?;

    println!(
        "Catalog: {} (v{}, {} questions, {} resources, {} exercises)",
        catalog.site.name,
        catalog.version,
        catalog.questions.len(),
        catalog.resources.len(),
        catalog.exercises.len()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .item_id
            .map(|id| format!("  [{}#{id}]", w.section))
            .unwrap_or_else(|| format!("  [{}]", w.section));
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
