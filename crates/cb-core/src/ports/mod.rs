//! Port interfaces for the bridge
//!
//! Ports define the contract between the bridge and the platform layer that
//! reaches the operating system's clipboard. The bridge only ever talks to
//! these traits, so a headless or in-memory host can stand in for the OS.

mod host_context;
mod system_clipboard;

pub use host_context::HostContextPort;
pub use system_clipboard::{ClipboardChangeListener, ListenerId, SystemClipboardPort};
