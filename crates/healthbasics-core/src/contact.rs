//! Contact form submission.
//!
//! [`ContactSubmitter`] makes exactly one delivery attempt through a
//! [`ContactTransport`] and folds every failure into
//! [`SubmissionOutcome::LocalFallback`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The fields of the contact form, serialized as the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Blank every field, as the form does after a successful send.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The remote endpoint accepted the payload.
    Sent,
    /// The remote call did not complete; nothing is actually stored.
    LocalFallback,
}

impl SubmissionOutcome {
    /// Message shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionOutcome::Sent => "Message sent — thank you!",
            SubmissionOutcome::LocalFallback => "Draft saved locally (no backend).",
        }
    }

    /// Whether the view should blank its form fields.
    pub fn clears_form(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent)
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Sent => write!(f, "sent"),
            SubmissionOutcome::LocalFallback => write!(f, "local-fallback"),
        }
    }
}

/// Something that can carry a contact form to its destination.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Short name used in logs (e.g. "http").
    fn name(&self) -> &str;

    /// Deliver the form once. `Ok` means the destination accepted it.
    async fn deliver(&self, input: &ContactFormInput) -> anyhow::Result<()>;
}

/// Single-attempt contact form submitter.
#[derive(Clone)]
pub struct ContactSubmitter {
    transport: Arc<dyn ContactTransport>,
}

impl ContactSubmitter {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        Self { transport }
    }

    /// Attempt delivery once. Never fails: any transport error becomes
    /// [`SubmissionOutcome::LocalFallback`].
    pub async fn submit(&self, input: &ContactFormInput) -> SubmissionOutcome {
        match self.transport.deliver(input).await {
            Ok(()) => {
                tracing::info!(transport = self.transport.name(), "contact form sent");
                SubmissionOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(
                    transport = self.transport.name(),
                    "contact form not delivered, falling back to local draft: {e:#}"
                );
                SubmissionOutcome::LocalFallback
            }
        }
    }
}
