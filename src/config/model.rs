//! Serde data structures for the rewriter configuration file.
//!
//! [`Config`] derives `Serialize` and `Deserialize` with
//! `deny_unknown_fields` for strict parsing. Every field has a default, so
//! an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Origin domain the CloudFront distribution forwards to.
pub const DEFAULT_ORIGIN_HOST: &str = "main.d1wc36cp4amanq.amplifyapp.com";

fn default_origin_host() -> String {
    DEFAULT_ORIGIN_HOST.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_origin_host")]
    pub origin_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_host: default_origin_host(),
        }
    }
}
