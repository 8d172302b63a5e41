//! Mock transport for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use healthbasics_core::contact::{ContactFormInput, ContactTransport};

/// A contact transport that never touches the network.
///
/// Accepts or rejects every delivery depending on how it was built, and
/// remembers what it was given.
pub struct MockTransport {
    accept: bool,
    /// Number of deliveries attempted.
    call_count: AtomicU32,
    /// Last form received.
    last_input: Mutex<Option<ContactFormInput>>,
}

impl MockTransport {
    /// A transport whose deliveries always succeed.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// A transport whose deliveries always fail.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Get the number of deliveries attempted.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last form delivered to this transport.
    pub fn last_input(&self) -> Option<ContactFormInput> {
        self.last_input
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ContactTransport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn deliver(&self, input: &ContactFormInput) -> anyhow::Result<()> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_input.lock() {
            *last = Some(input.clone());
        }

        if self.accept {
            Ok(())
        } else {
            anyhow::bail!("mock transport rejected the submission")
        }
    }
}
