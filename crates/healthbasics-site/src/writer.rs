//! Static site writer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use healthbasics_core::route::Route;

use crate::html::{render_page, PageContext, ViewState};
use crate::manifest::write_manifest;

/// Name of the manifest file written at the output root.
pub const MANIFEST_FILE: &str = "routes.json";

/// Render every route into `out_dir`, plus the route manifest.
///
/// Returns the paths written, pages first in navigation order.
pub fn write_site(ctx: &PageContext<'_>, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(Route::ALL.len() + 1);
    for route in Route::ALL {
        let path = out_dir.join(route.output_file());
        let html = render_page(route, ctx, &ViewState::default());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, html)
            .with_context(|| format!("failed to write page: {}", path.display()))?;
        tracing::debug!(route = route.path(), "wrote {}", path.display());
        written.push(path);
    }

    let manifest_path = out_dir.join(MANIFEST_FILE);
    write_manifest(ctx.catalog, &manifest_path)?;
    written.push(manifest_path);

    tracing::info!(pages = Route::ALL.len(), "site written to {}", out_dir.display());
    Ok(written)
}
