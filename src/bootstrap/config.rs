//! # Configuration Loader
//!
//! Reads a TOML file into [`BridgeConfig`]. Pure data loading: missing
//! sections take their defaults, and nothing beyond the TOML shape is
//! validated here.

use std::path::Path;

use anyhow::Context;
use cb_core::BridgeConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML, or does not fit the config shape
pub fn load_config(config_path: &Path) -> anyhow::Result<BridgeConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    BridgeConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cb_core::ClipboardBackend;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [clipboard]
            backend = "memory"

            [logging]
            filter = "clipbridge=trace"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.clipboard.backend, ClipboardBackend::Memory);
        assert_eq!(config.logging.filter.as_deref(), Some("clipbridge=trace"));
    }

    /// Test that missing sections result in default values
    #[test]
    fn test_load_config_returns_defaults_when_missing() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"# nothing configured\n").unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config, BridgeConfig::default());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("clipbridge.toml");

        let err = load_config(&missing).unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_rejects_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[clipboard\nbackend = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
