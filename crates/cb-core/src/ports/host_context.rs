use std::sync::Arc;

use super::SystemClipboardPort;

/// Capability handle to the hosting UI context.
///
/// The bridge receives one of these at construction instead of reaching for
/// a process-wide activity. A host without a clipboard service returns
/// `None`, and every bridge read then degrades to its empty default.
pub trait HostContextPort: Send + Sync {
    fn clipboard_service(&self) -> Option<Arc<dyn SystemClipboardPort>>;
}
