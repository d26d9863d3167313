use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use cb_core::clipboard::PrimaryClip;
use cb_core::ports::{ClipboardChangeListener, ListenerId, SystemClipboardPort};
use tracing::debug;

use super::listeners::ListenerRegistry;

/// Process-local clipboard.
///
/// Used by headless hosts and tests. Change notifications are delivered
/// synchronously on the thread that replaced the clip, after the new clip is
/// visible to readers.
#[derive(Default)]
pub struct InMemoryClipboard {
    clip: Mutex<Option<PrimaryClip>>,
    listeners: ListenerRegistry,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(clip: PrimaryClip) -> Self {
        Self {
            clip: Mutex::new(Some(clip)),
            listeners: ListenerRegistry::default(),
        }
    }

    /// Drop the primary clip, as if another application cleared it.
    pub fn clear(&self) {
        *self.lock() = None;
        self.listeners.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, Option<PrimaryClip>> {
        self.clip.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for InMemoryClipboard {
    fn primary_clip(&self) -> Result<Option<PrimaryClip>> {
        Ok(self.lock().clone())
    }

    fn set_primary_clip(&self, clip: PrimaryClip) -> Result<()> {
        *self.lock() = Some(clip);
        self.listeners.notify_all();
        Ok(())
    }

    fn add_primary_clip_changed_listener(
        &self,
        listener: Arc<dyn ClipboardChangeListener>,
    ) -> Result<ListenerId> {
        let id = self.listeners.add(listener);
        debug!(listener_id = %id, "in-memory clipboard listener registered");
        Ok(id)
    }

    fn remove_primary_clip_changed_listener(&self, id: ListenerId) -> Result<()> {
        self.listeners.remove(id);
        Ok(())
    }
}
