//! The `healthbasics page` command.

use std::path::PathBuf;

use anyhow::Result;

use healthbasics_contact::config::load_config_from;
use healthbasics_core::catalog::ContentCatalog;
use healthbasics_site::{render_path, PageContext};

pub fn execute(
    path: String,
    content: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let content_path = content.or(config.content.clone());
    let catalog = ContentCatalog::load(content_path.as_deref())?;
    let ctx = PageContext::new(&catalog, &config.contact.endpoint);

    let Some(html) = render_path(&path, &ctx) else {
        anyhow::bail!("unknown route: {path}");
    };
    println!("{html}");

    Ok(())
}
