//! Configuration loading and validation.
//!
//! The only setting is the origin host. It resolves, lowest precedence
//! first, from the built-in default, an optional config file, and the
//! `--origin-host` flag (or `ORIGIN_HOST`).

pub mod model;
pub mod sources;
pub mod validation;

use std::path::Path;

use crate::error::EdgeError;
use model::Config;

/// Resolve and validate the effective configuration.
pub fn load(file: Option<&Path>, origin_host: Option<&str>) -> Result<Config, EdgeError> {
    let mut config = match file {
        Some(path) => sources::file_source::read_and_parse(path)?,
        None => Config::default(),
    };

    if let Some(host) = origin_host {
        config.origin_host = host.to_string();
    }

    if let Err(errors) = validation::validate(&config) {
        return Err(EdgeError::ConfigValidation { errors });
    }

    tracing::debug!(
        origin_host = %config.origin_host,
        file = ?file,
        "configuration loaded"
    );

    Ok(config)
}
