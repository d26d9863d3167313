//! # cb-core
//!
//! Core domain models and ports for ClipBridge.
//!
//! This crate contains the clipboard bridge's pure logic (type table, MIME
//! matching, the sticky dirty flag) and the port traits the platform layer
//! implements. It has no platform dependencies.

pub mod clipboard;
pub mod config;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{
    ClipItem, ClipText, DirtyFlag, MimeType, PrimaryClip, TypeCode, TypeCodeError,
    CLIPBOARD_TYPE_TABLE,
};
pub use config::{BridgeConfig, ClipboardBackend};
