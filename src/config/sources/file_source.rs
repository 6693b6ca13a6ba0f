//! Config file loader.
//!
//! Reads the file once at startup (an edge function never reloads) and picks
//! the format from the extension. Validation is left to the caller so that
//! higher-precedence overrides are merged first.

use std::path::Path;

use super::parse_config_str;
use crate::config::model::Config;
use crate::error::EdgeError;

pub fn read_and_parse(path: &Path) -> Result<Config, EdgeError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EdgeError::ConfigFileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EdgeError::Io(e)
        }
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    parse_config_str(ext, &content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = read_and_parse(Path::new("example/missing.yaml")).unwrap_err();
        assert!(matches!(err, EdgeError::ConfigFileNotFound { ref path } if path.ends_with("missing.yaml")));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn invalid_value_parses_without_validation() {
        let config = read_and_parse(Path::new("example/invalid-origin.yaml")).unwrap();
        assert_eq!(config.origin_host, "https://x.example.com");
    }
}
