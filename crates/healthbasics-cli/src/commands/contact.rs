//! The `healthbasics contact` command.

use std::path::PathBuf;

use anyhow::Result;

use healthbasics_contact::config::{create_transport, load_config_from};
use healthbasics_core::contact::{ContactFormInput, ContactSubmitter};

pub async fn execute(
    name: String,
    email: String,
    message: String,
    endpoint: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let form = ContactFormInput::new(name, email, message);
    let missing = form.missing_fields();
    anyhow::ensure!(
        missing.is_empty(),
        "missing required field(s): {}",
        missing.join(", ")
    );

    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(endpoint) = endpoint {
        config.contact.endpoint = endpoint;
    }

    let submitter = ContactSubmitter::new(create_transport(&config.contact)?);
    let outcome = submitter.submit(&form).await;

    println!("{}", outcome.label());
    Ok(())
}
