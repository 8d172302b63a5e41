//! healthbasics-contact — contact form transports and site configuration.
//!
//! Implements the `ContactTransport` trait over HTTP, plus a mock for tests,
//! and loads the `healthbasics.toml` configuration.

pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use config::{create_transport, load_config, ContactConfig, SiteConfig};
pub use error::ContactError;
pub use http::HttpTransport;
