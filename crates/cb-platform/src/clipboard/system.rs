use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{anyhow, Context, Result};
use cb_core::clipboard::PrimaryClip;
use cb_core::ports::{ClipboardChangeListener, ListenerId, SystemClipboardPort};
use clipboard_rs::ClipboardContext;
use tracing::{debug, info};

use super::common::CommonClipboardImpl;
use super::listeners::ListenerRegistry;
use super::watcher::NativeWatcher;

/// The operating system clipboard, reached through `clipboard-rs`.
///
/// The native watcher runs only while at least one listener is registered.
pub struct SystemClipboard {
    inner: Mutex<ClipboardContext>,
    listeners: Arc<ListenerRegistry>,
    watcher: Mutex<Option<NativeWatcher>>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!(e))
            .context("failed to open the system clipboard")?;

        Ok(Self {
            inner: Mutex::new(context),
            listeners: Arc::new(ListenerRegistry::default()),
            watcher: Mutex::new(None),
        })
    }

    fn context(&self) -> MutexGuard<'_, ClipboardContext> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn watcher(&self) -> MutexGuard<'_, Option<NativeWatcher>> {
        self.watcher.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SystemClipboardPort for SystemClipboard {
    fn primary_clip(&self) -> Result<Option<PrimaryClip>> {
        let ctx = self.context();
        CommonClipboardImpl::read_primary_clip(&ctx)
    }

    fn set_primary_clip(&self, clip: PrimaryClip) -> Result<()> {
        let ctx = self.context();
        CommonClipboardImpl::write_primary_clip(&ctx, &clip)?;
        debug!(
            mime_types = clip.mime_types.len(),
            items = clip.item_count(),
            "installed primary clip"
        );
        Ok(())
    }

    fn add_primary_clip_changed_listener(
        &self,
        listener: Arc<dyn ClipboardChangeListener>,
    ) -> Result<ListenerId> {
        let id = self.listeners.add(listener);

        let mut watcher = self.watcher();
        if watcher.is_none() {
            match NativeWatcher::spawn(Arc::clone(&self.listeners)) {
                Ok(started) => *watcher = Some(started),
                Err(e) => {
                    self.listeners.remove(id);
                    return Err(e);
                }
            }
        }

        Ok(id)
    }

    fn remove_primary_clip_changed_listener(&self, id: ListenerId) -> Result<()> {
        if !self.listeners.remove(id) {
            debug!(listener_id = %id, "listener was not registered");
            return Ok(());
        }

        if self.listeners.is_empty() {
            if let Some(mut watcher) = self.watcher().take() {
                watcher.stop();
                info!("Clipboard watcher stopped");
            }
        }

        Ok(())
    }
}
