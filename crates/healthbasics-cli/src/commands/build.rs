//! The `healthbasics build` command.

use std::path::PathBuf;

use anyhow::Result;

use healthbasics_contact::config::load_config_from;
use healthbasics_core::catalog::{validate_catalog, ContentCatalog};
use healthbasics_site::{write_site, PageContext};

pub fn execute(
    output: Option<PathBuf>,
    content: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let content_path = content.or(config.content.clone());
    let catalog = ContentCatalog::load(content_path.as_deref())?;

    for w in validate_catalog(&catalog) {
        eprintln!("Warning: [{}] {}", w.section, w.message);
    }

    let output = output.unwrap_or(config.output_dir);
    let ctx = PageContext::new(&catalog, &config.contact.endpoint);

    let written = write_site(&ctx, &output)?;
    println!("Wrote {} files to {}", written.len(), output.display());

    Ok(())
}
