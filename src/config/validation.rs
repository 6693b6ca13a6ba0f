//! Configuration validation with detailed error reporting.
//!
//! The [`validate`] function checks a parsed [`Config`] and returns a list
//! of [`ValidationError`] values with per-field suggestions.

use url::Host;

use super::model::Config;
use crate::error::ValidationError;

const ORIGIN_HOST_FIELD: &str = "origin_host";

/// Validate an origin host (`domain` or `domain:port`). Returns `Ok(())` or
/// a human-readable error.
pub fn validate_origin_host(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("origin host cannot be empty".into());
    }
    if host.chars().any(char::is_whitespace) {
        return Err(format!("'{host}' contains whitespace"));
    }
    if host.contains("://") {
        return Err(format!("'{host}' must not include a scheme"));
    }
    if host.contains('/') {
        return Err(format!("'{host}' must not include a path"));
    }

    let name = match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') => {
            port.parse::<u16>()
                .map_err(|_| format!("'{port}' is not a valid port"))?;
            name
        }
        _ => host,
    };

    Host::parse(name)
        .map(|_| ())
        .map_err(|_| format!("'{name}' is not a valid hostname"))
}

/// Strip a leading scheme and trailing path so a suggestion can be offered.
fn suggest_host(host: &str) -> Option<String> {
    let without_scheme = host.split_once("://").map_or(host, |(_, rest)| rest);
    let bare = without_scheme.split('/').next().unwrap_or(without_scheme).trim();
    (bare != host && validate_origin_host(bare).is_ok()).then(|| format!("did you mean '{bare}'?"))
}

pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_origin_host(&config.origin_host) {
        errors.push(ValidationError {
            field: ORIGIN_HOST_FIELD.into(),
            message: msg,
            suggestion: suggest_host(&config.origin_host),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn format_validation_report(path: &str, config: &Config) -> String {
    format!("{path} is valid\n  origin host: {}", config.origin_host)
}
