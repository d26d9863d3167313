//! Native clipboard change watcher
//!
//! Runs `clipboard-rs`'s blocking watch loop on a dedicated thread and
//! forwards every OS change notification to the adapter's registered
//! listeners. The watcher carries no clipboard content; listeners re-query
//! the clipboard when they need it.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, Context, Result};
use clipboard_rs::{
    ClipboardHandler, ClipboardWatcher as RSClipboardWatcher, ClipboardWatcherContext,
    WatcherShutdown,
};
use tracing::{debug, info, warn};

use super::listeners::ListenerRegistry;

struct ListenerFanout {
    listeners: Arc<ListenerRegistry>,
}

impl ClipboardHandler for ListenerFanout {
    fn on_clipboard_change(&mut self) {
        debug!("OS reported primary clip change");
        self.listeners.notify_all();
    }
}

pub(crate) struct NativeWatcher {
    shutdown: Option<WatcherShutdown>,
    join: Option<JoinHandle<()>>,
}

impl NativeWatcher {
    /// Start watching. Returns once the watch loop is armed.
    pub(crate) fn spawn(listeners: Arc<ListenerRegistry>) -> Result<Self> {
        let (ready_tx, ready_rx) = mpsc::channel::<Result<WatcherShutdown>>();

        let join = thread::Builder::new()
            .name("clipboard-watcher".into())
            .spawn(move || {
                let mut watcher_ctx = match ClipboardWatcherContext::<ListenerFanout>::new() {
                    Ok(ctx) => ctx,
                    Err(e) => {
                        let _ = ready_tx
                            .send(Err(anyhow!("Failed to create watcher context: {}", e)));
                        return;
                    }
                };

                let shutdown = watcher_ctx
                    .add_handler(ListenerFanout { listeners })
                    .get_shutdown_channel();
                if ready_tx.send(Ok(shutdown)).is_err() {
                    return;
                }

                info!("start clipboard watch");
                watcher_ctx.start_watch();
                info!("clipboard watch stopped");
            })
            .context("failed to spawn clipboard watcher thread")?;

        let shutdown = ready_rx
            .recv()
            .context("clipboard watcher thread exited before arming")??;

        Ok(Self {
            shutdown: Some(shutdown),
            join: Some(join),
        })
    }

    pub(crate) fn stop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            shutdown.stop();
        }
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("clipboard watcher thread panicked");
            }
        }
    }
}

impl Drop for NativeWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
