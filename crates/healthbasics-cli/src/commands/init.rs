//! The `healthbasics init` command.

use anyhow::Result;

use healthbasics_core::catalog::DEFAULT_CATALOG;

pub fn execute() -> Result<()> {
    // Create healthbasics.toml
    if std::path::Path::new("healthbasics.toml").exists() {
        println!("healthbasics.toml already exists, skipping.");
    } else {
        std::fs::write("healthbasics.toml", SAMPLE_CONFIG)?;
        println!("Created healthbasics.toml");
    }

    // Create an editable copy of the built-in catalog
    std::fs::create_dir_all("content")?;
    let catalog_path = std::path::Path::new("content/site.toml");
    if catalog_path.exists() {
        println!("content/site.toml already exists, skipping.");
    } else {
        std::fs::write(catalog_path, DEFAULT_CATALOG)?;
        println!("Created content/site.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit content/site.toml and set your contact endpoint in healthbasics.toml");
    println!("  2. Run: healthbasics validate --content content/site.toml");
    println!("  3. Run: healthbasics build");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# healthbasics configuration

content = "content/site.toml"
output_dir = "site"

[contact]
endpoint = "${HEALTHBASICS_API_BASE}/api/contacts"
timeout_secs = 10
"#;
