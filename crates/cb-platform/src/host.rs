use std::sync::Arc;

use cb_core::ports::{HostContextPort, SystemClipboardPort};
use cb_core::ClipboardBackend;
use tracing::warn;

use crate::clipboard::{InMemoryClipboard, SystemClipboard};

/// Host context of a desktop process.
///
/// Stands in for the hosting UI activity: it owns the clipboard service the
/// bridge talks to, or none when the OS clipboard cannot be reached.
#[derive(Clone, Default)]
pub struct DesktopHostContext {
    clipboard: Option<Arc<dyn SystemClipboardPort>>,
}

impl DesktopHostContext {
    /// Connect to the OS clipboard. Falls back to a host without a
    /// clipboard service if the connection fails.
    pub fn system() -> Self {
        match SystemClipboard::new() {
            Ok(clipboard) => Self::with_clipboard(Arc::new(clipboard)),
            Err(e) => {
                warn!(error = %e, "system clipboard unavailable, clipboard reads will be empty");
                Self::headless()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::with_clipboard(Arc::new(InMemoryClipboard::new()))
    }

    pub fn with_clipboard(clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self {
            clipboard: Some(clipboard),
        }
    }

    /// A host with no clipboard service at all.
    pub fn headless() -> Self {
        Self { clipboard: None }
    }

    pub fn from_backend(backend: ClipboardBackend) -> Self {
        match backend {
            ClipboardBackend::System => Self::system(),
            ClipboardBackend::Memory => Self::in_memory(),
        }
    }
}

impl HostContextPort for DesktopHostContext {
    fn clipboard_service(&self) -> Option<Arc<dyn SystemClipboardPort>> {
        self.clipboard.clone()
    }
}
