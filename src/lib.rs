//! # clipbridge
//!
//! Clipboard bridge between a hosting UI context and a native application.
//!
//! A [`ClipboardBridge`] is built around an explicitly passed host handle
//! ([`cb_core::ports::HostContextPort`]). Native callers poll it, usually
//! once per frame, through the Rust API or the C ABI in [`ffi`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use clipbridge::{ClipboardBridge, TypeCode};
//! use cb_platform::DesktopHostContext;
//!
//! let bridge = ClipboardBridge::new(Arc::new(DesktopHostContext::system()));
//! bridge.initialize();
//! bridge.set_content(TypeCode::PlainText, "abc");
//! assert_eq!(bridge.content(), "abc");
//! ```

pub mod bootstrap;
pub mod bridge;
pub mod ffi;

pub use bridge::ClipboardBridge;
pub use cb_core::{ClipText, TypeCode};
