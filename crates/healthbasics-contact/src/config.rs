//! Site configuration and transport factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use healthbasics_core::contact::ContactTransport;

use crate::http::{HttpTransport, DEFAULT_CONTACT_PATH, DEFAULT_TIMEOUT_SECS};

/// Where and how contact forms are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// URL the form is POSTed to. The default is the site-relative
    /// `/api/contacts`; the `contact` command needs an absolute URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ContactConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_endpoint() -> String {
    DEFAULT_CONTACT_PATH.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Top-level healthbasics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content catalog to render. `None` uses the built-in catalog.
    #[serde(default)]
    pub content: Option<PathBuf>,
    /// Output directory for the rendered site.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Contact form delivery.
    #[serde(default)]
    pub contact: ContactConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./site")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content: None,
            output_dir: default_output_dir(),
            contact: ContactConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied through as-is; a value that itself contains
/// `${...}` is not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `healthbasics.toml` in the current directory
/// 2. `~/.config/healthbasics/config.toml`
///
/// Environment variable override: `HEALTHBASICS_CONTACT_ENDPOINT`.
pub fn load_config() -> Result<SiteConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SiteConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("healthbasics.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => SiteConfig::default(),
    };

    if let Ok(endpoint) = std::env::var("HEALTHBASICS_CONTACT_ENDPOINT") {
        config.contact.endpoint = endpoint;
    }

    config.contact.endpoint = resolve_env_vars(&config.contact.endpoint);
    config.content = config
        .content
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    Ok(config)
}

/// Parse a config file body.
pub fn parse_config_str(content: &str) -> Result<SiteConfig> {
    Ok(toml::from_str::<SiteConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("healthbasics"))
}

/// Create the contact transport described by the configuration.
pub fn create_transport(config: &ContactConfig) -> Result<Arc<dyn ContactTransport>> {
    let transport = HttpTransport::new(&config.endpoint, config.timeout())?;
    Ok(Arc::new(transport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_HEALTHBASICS_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_HEALTHBASICS_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_HEALTHBASICS_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_HEALTHBASICS_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_HEALTHBASICS_SELF_REF", "x${_HEALTHBASICS_SELF_REF}");
        std::env::set_var("_HEALTHBASICS_OTHER", "y");

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(resolve_env_vars(
                "${_HEALTHBASICS_SELF_REF}/${_HEALTHBASICS_OTHER}",
            ));
        });
        let resolved = rx
            .recv_timeout(Duration::from_secs(3))
            .expect("resolve_env_vars should return");
        assert_eq!(resolved, "x${_HEALTHBASICS_SELF_REF}/y");

        std::env::remove_var("_HEALTHBASICS_SELF_REF");
        std::env::remove_var("_HEALTHBASICS_OTHER");
    }

    #[test]
    fn default_config() {
        let config = SiteConfig::default();
        assert!(config.content.is_none());
        assert_eq!(config.output_dir, PathBuf::from("./site"));
        assert_eq!(config.contact.endpoint, "/api/contacts");
        assert_eq!(config.contact.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
content = "content/site.toml"
output_dir = "public"

[contact]
endpoint = "https://example.org/api/contacts"
timeout_secs = 0
"#;
        let config = parse_config_str(toml_str).unwrap();
        assert_eq!(config.content, Some(PathBuf::from("content/site.toml")));
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.contact.endpoint, "https://example.org/api/contacts");
        assert_eq!(config.contact.timeout(), None);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config.contact.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("healthbasics.toml");
        std::fs::write(
            &path,
            "[contact]\nendpoint = \"http://127.0.0.1:9/${_HEALTHBASICS_MISSING_VAR}api\"\n",
        )
        .unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        if std::env::var("HEALTHBASICS_CONTACT_ENDPOINT").is_err() {
            assert_eq!(config.contact.endpoint, "http://127.0.0.1:9/api");
        }

        assert!(load_config_from(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn create_transport_from_config() {
        let transport = create_transport(&ContactConfig::default()).unwrap();
        assert_eq!(transport.name(), "http");
    }
}
