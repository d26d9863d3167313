mod bridge_config;

pub use bridge_config::{BridgeConfig, ClipboardBackend, ClipboardConfig, LoggingConfig};
