use std::sync::atomic::{AtomicBool, Ordering};

use crate::ports::ClipboardChangeListener;

/// Sticky "clipboard has changed" flag.
///
/// Once marked it stays set; reading never clears it. It answers "has the
/// clipboard changed since the bridge started listening", not "since the
/// last poll".
#[derive(Debug, Default)]
pub struct DirtyFlag {
    dirty: AtomicBool,
}

impl DirtyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        if !self.dirty.swap(true, Ordering::AcqRel) {
            #[cfg(feature = "tracing")]
            tracing::debug!("clipboard dirty flag set");
        }
    }

    pub fn is_set(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

impl ClipboardChangeListener for DirtyFlag {
    fn on_primary_clip_changed(&self) {
        self.mark();
    }
}
