//! Clipboard bridge between a hosting UI context and a polling native caller.
//!
//! The bridge never fails its caller. A missing clipboard service, an empty
//! clipboard, or an OS error all read as "no clip": type [`TypeCode::Unknown`],
//! empty text, length 0. Writes that cannot be carried out are dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cb_core::ports::{HostContextPort, ListenerId, SystemClipboardPort};
use cb_core::{ClipText, DirtyFlag, PrimaryClip, TypeCode};
use tracing::{debug, info, warn};

struct Registration {
    service: Arc<dyn SystemClipboardPort>,
    id: ListenerId,
}

pub struct ClipboardBridge {
    host: Arc<dyn HostContextPort>,
    dirty: Arc<DirtyFlag>,
    registration: Mutex<Option<Registration>>,
}

impl ClipboardBridge {
    pub fn new(host: Arc<dyn HostContextPort>) -> Self {
        Self {
            host,
            dirty: Arc::new(DirtyFlag::new()),
            registration: Mutex::new(None),
        }
    }

    /// Start observing the clipboard.
    ///
    /// Registers a change listener with the host's clipboard service and
    /// marks the clipboard as updated right away. Calling it again only
    /// re-marks the flag.
    pub fn initialize(&self) {
        let mut registration = self.registration();

        if registration.is_none() {
            match self.host.clipboard_service() {
                Some(service) => {
                    match service.add_primary_clip_changed_listener(self.dirty.clone()) {
                        Ok(id) => {
                            info!(listener_id = %id, "clipboard bridge initialized");
                            *registration = Some(Registration { service, id });
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to register primary clip listener");
                        }
                    }
                }
                None => warn!("no clipboard service, clipboard changes will not be observed"),
            }
        }

        self.dirty.mark();
    }

    /// Whether the clipboard changed since [`initialize`](Self::initialize).
    ///
    /// The flag is sticky: reading it does not reset it.
    pub fn has_updated(&self) -> bool {
        self.dirty.is_set()
    }

    pub fn clip_type(&self) -> TypeCode {
        let code = self
            .primary_clip()
            .map(|clip| TypeCode::detect(&clip))
            .unwrap_or(TypeCode::Unknown);
        debug!(type_code = code.as_i32(), "clip type queried");
        code
    }

    /// First item of the primary clip as text, or an empty string.
    pub fn content(&self) -> String {
        self.primary_clip()
            .and_then(|clip| clip.first_item_text().map(str::to_owned))
            .unwrap_or_default()
    }

    /// Character count of [`content`](Self::content).
    ///
    /// This is a separate clipboard query; another application may change the
    /// clipboard between the two calls. Use [`read`](Self::read) when text
    /// and length must agree.
    pub fn content_length(&self) -> usize {
        self.content().chars().count()
    }

    /// Text and length from a single clipboard query.
    pub fn read(&self) -> ClipText {
        ClipText::new(self.content())
    }

    /// Replace the primary clip with `text`, tagged as `type_code`.
    ///
    /// [`TypeCode::Unknown`] is ignored so that nothing is ever written
    /// under an unrecognized type.
    pub fn set_content(&self, type_code: TypeCode, text: &str) {
        let Some(mime) = type_code.mime() else {
            debug!("ignoring clipboard write with unknown type");
            return;
        };
        let Some(service) = self.clipboard_service() else {
            return;
        };

        match service.set_primary_clip(PrimaryClip::plain_text(mime, text)) {
            Ok(()) => debug!(type_code = type_code.as_i32(), "clipboard content set"),
            Err(e) => warn!(error = %e, "failed to set primary clip"),
        }
    }

    /// Remove the change listener. Also done on drop.
    ///
    /// The updated flag keeps its value.
    pub fn shutdown(&self) {
        let Some(Registration { service, id }) = self.registration().take() else {
            return;
        };

        match service.remove_primary_clip_changed_listener(id) {
            Ok(()) => info!(listener_id = %id, "clipboard bridge shut down"),
            Err(e) => warn!(error = %e, listener_id = %id, "failed to remove primary clip listener"),
        }
    }

    fn clipboard_service(&self) -> Option<Arc<dyn SystemClipboardPort>> {
        let service = self.host.clipboard_service();
        if service.is_none() {
            debug!("host has no clipboard service");
        }
        service
    }

    fn primary_clip(&self) -> Option<PrimaryClip> {
        match self.clipboard_service()?.primary_clip() {
            Ok(clip) => clip,
            Err(e) => {
                warn!(error = %e, "failed to query primary clip");
                None
            }
        }
    }

    fn registration(&self) -> MutexGuard<'_, Option<Registration>> {
        self.registration.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ClipboardBridge {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_platform::DesktopHostContext;

    fn bridge() -> ClipboardBridge {
        ClipboardBridge::new(Arc::new(DesktopHostContext::in_memory()))
    }

    #[test]
    fn not_updated_before_initialize() {
        assert!(!bridge().has_updated());
    }

    #[test]
    fn second_initialize_keeps_one_registration() {
        let bridge = bridge();
        bridge.initialize();
        let first = bridge.registration().as_ref().map(|r| r.id);
        bridge.initialize();
        let second = bridge.registration().as_ref().map(|r| r.id);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let bridge = bridge();
        bridge.initialize();
        bridge.shutdown();
        bridge.shutdown();
        assert!(bridge.registration().is_none());
        assert!(bridge.has_updated());
    }
}
