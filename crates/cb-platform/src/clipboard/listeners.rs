use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cb_core::ports::{ClipboardChangeListener, ListenerId};

type Entry = (ListenerId, Arc<dyn ClipboardChangeListener>);

/// Registered change listeners of one clipboard adapter.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Entry>>,
}

impl ListenerRegistry {
    pub(crate) fn add(&self, listener: Arc<dyn ClipboardChangeListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        id
    }

    /// Returns whether `id` was registered.
    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub(crate) fn notify_all(&self) {
        // Listeners run outside the lock so they may (un)register freely.
        let listeners: Vec<_> = self
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener.on_primary_clip_changed();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl ClipboardChangeListener for Counter {
        fn on_primary_clip_changed(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn notifies_only_registered_listeners() {
        let registry = ListenerRegistry::default();
        let first = Arc::new(Counter::default());
        let second = Arc::new(Counter::default());

        let first_id = registry.add(first.clone());
        registry.add(second.clone());
        registry.notify_all();

        assert!(registry.remove(first_id));
        assert!(!registry.remove(first_id));
        registry.notify_all();

        assert_eq!(first.0.load(Ordering::SeqCst), 1);
        assert_eq!(second.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn ids_are_unique() {
        let registry = ListenerRegistry::default();
        let a = registry.add(Arc::new(Counter::default()));
        let b = registry.add(Arc::new(Counter::default()));
        assert_ne!(a, b);
        assert!(!registry.is_empty());
    }
}
