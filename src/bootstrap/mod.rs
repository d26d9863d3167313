//! Wiring from configuration to a ready bridge.

pub mod config;
pub mod tracing;

use std::sync::Arc;

use cb_core::BridgeConfig;
use cb_platform::DesktopHostContext;

use crate::bridge::ClipboardBridge;

pub fn build_host_context(config: &BridgeConfig) -> DesktopHostContext {
    DesktopHostContext::from_backend(config.clipboard.backend)
}

pub fn build_bridge(config: &BridgeConfig) -> ClipboardBridge {
    ClipboardBridge::new(Arc::new(build_host_context(config)))
}
