//! CloudFront edge request model and the `Host` rewrite.
//!
//! [`event`] holds the wire types, [`rewriter`] the transformation itself,
//! and [`hostname`] the client-host resolution the origin relies on.

pub mod event;
pub mod hostname;
pub mod rewriter;

pub use event::{EdgeEvent, HeaderEntry, HeaderMap, Request};
pub use rewriter::HeaderRewriter;
