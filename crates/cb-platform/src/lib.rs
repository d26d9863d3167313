//! # cb-platform
//!
//! Platform-specific implementations for ClipBridge.
//!
//! This crate implements the `cb-core` ports against the operating system
//! clipboard (through `clipboard-rs`) and provides an in-memory clipboard
//! for headless hosts.

pub mod clipboard;
pub mod host;

pub use clipboard::{InMemoryClipboard, SystemClipboard};
pub use host::DesktopHostContext;
