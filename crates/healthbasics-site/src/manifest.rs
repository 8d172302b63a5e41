//! Route manifest output.
//!
//! A `routes.json` file next to the rendered pages, describing which file
//! serves each path. Static hosts and link checkers read it instead of
//! walking the output tree.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use healthbasics_core::catalog::ContentCatalog;
use healthbasics_core::route::Route;

/// Generate the manifest document for a catalog.
pub fn generate_manifest(catalog: &ContentCatalog) -> serde_json::Value {
    let routes: Vec<_> = Route::ALL
        .iter()
        .map(|r| {
            json!({
                "path": r.path(),
                "label": r.label(),
                "file": r.output_file(),
                "header_nav": r.in_header_nav(),
                "footer_links": r.in_footer_links(),
            })
        })
        .collect();

    json!({
        "site": catalog.site.name,
        "catalog_version": catalog.version,
        "generator": {
            "name": "healthbasics",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "quiz": {
            "questions": catalog.questions.len(),
        },
        "routes": routes
    })
}

/// Write the manifest to a file.
pub fn write_manifest(catalog: &ContentCatalog, path: &Path) -> Result<()> {
    let manifest = generate_manifest(catalog);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(path, json)?;
    Ok(())
}
