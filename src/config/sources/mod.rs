//! File-backed configuration sources.
//!
//! Provides the [`parse_config_str`] helper for format-specific
//! deserialization (YAML, JSON, TOML, gated by feature flags) and the
//! [`file_source`] loader built on top of it.

pub mod file_source;

use crate::config::model::Config;
use crate::error::EdgeError;

/// Parse a config string based on file extension.
pub fn parse_config_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<Config, EdgeError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| EdgeError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| EdgeError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| EdgeError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(EdgeError::UnsupportedFormat(other.to_string())),
    }
}
