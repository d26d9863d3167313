//! Clipboard port - abstracts the OS clipboard service
//!
//! This port defines the interface for reading the primary clip, replacing
//! it, and subscribing to "primary clip changed" notifications.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::clipboard::PrimaryClip;

/// Identifies one listener registration with a clipboard service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Callback invoked whenever the primary clip changes.
///
/// Implementations may be called from a platform watcher thread and must
/// not block.
pub trait ClipboardChangeListener: Send + Sync {
    fn on_primary_clip_changed(&self);
}

/// Clipboard port - abstracts the OS clipboard service
///
/// This trait provides a platform-agnostic interface to the clipboard,
/// allowing the bridge to work without depending on a platform backend.
pub trait SystemClipboardPort: Send + Sync {
    /// Current primary clip, `None` when the clipboard holds nothing.
    fn primary_clip(&self) -> Result<Option<PrimaryClip>>;

    /// Install `clip` as the new primary clip.
    fn set_primary_clip(&self, clip: PrimaryClip) -> Result<()>;

    /// Register `listener` for change notifications until it is removed.
    fn add_primary_clip_changed_listener(
        &self,
        listener: Arc<dyn ClipboardChangeListener>,
    ) -> Result<ListenerId>;

    /// Remove a registration. Unknown ids are ignored.
    fn remove_primary_clip_changed_listener(&self, id: ListenerId) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ports_are_object_safe() {
        fn assert_clipboard(_port: &dyn SystemClipboardPort) {}
        fn assert_listener(_listener: &dyn ClipboardChangeListener) {}
        let _ = (assert_clipboard, assert_listener);
    }
}
