//! Edge host rewriter is a CloudFront Lambda@Edge function.
//!
//! For every origin-request event it copies the client's `host` header into
//! `x-original-host` and replaces `host` with the configured origin domain,
//! so an origin that serves many custom domains can still tell them apart.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (serve, rewrite, validate).
//! - [`config`] -- Origin host configuration: defaults, files, validation.
//! - [`edge`] -- CloudFront event model and the `Host` rewrite itself.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`handler`] -- Lambda runtime binding.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML config file support _(enabled by default)_ |
//! | `json` | JSON config file support |
//! | `toml` | TOML config file support |
//! | `file-backends` | All file format backends |
//! | `full` | All features |

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod edge;
pub mod error;
pub mod handler;
pub mod logging;
