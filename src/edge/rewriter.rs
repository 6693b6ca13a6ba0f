//! `Host` rewriting for origin-request events.
//!
//! [`HeaderRewriter`] copies the client's `host` header into
//! `x-original-host` and points `host` at the configured origin domain.
//! The map keys are lower-case while the entry `key` fields are written as
//! `Host` and `x-original-host`; CloudFront matches map keys
//! case-insensitively but forwards the entry key verbatim.

use super::event::{EdgeEvent, HeaderEntry, Request};
use crate::error::EdgeError;

pub const HOST: &str = "host";
pub const HOST_DISPLAY: &str = "Host";
pub const ORIGINAL_HOST: &str = "x-original-host";

#[derive(Debug, Clone)]
pub struct HeaderRewriter {
    origin_host: String,
}

impl HeaderRewriter {
    #[must_use]
    pub fn new(origin_host: impl Into<String>) -> Self {
        Self {
            origin_host: origin_host.into(),
        }
    }

    #[must_use]
    pub fn origin_host(&self) -> &str {
        &self.origin_host
    }

    /// Rewrite the first record's request and return it.
    ///
    /// Fails with [`EdgeError::EmptyEvent`] when the event has no records.
    /// Any records after the first are dropped untouched.
    pub fn rewrite(&self, event: EdgeEvent) -> Result<Request, EdgeError> {
        let mut request = event.into_first_request()?;
        self.rewrite_request(&mut request);
        Ok(request)
    }

    /// Rewrite `request` in place and return the host the client sent.
    ///
    /// A missing `host` header, or one with no entries, yields `""`.
    pub fn rewrite_request(&self, request: &mut Request) -> String {
        let original_host = request.first_value(HOST).unwrap_or_default().to_string();

        request.set_header(
            ORIGINAL_HOST,
            HeaderEntry::new(ORIGINAL_HOST, original_host.as_str()),
        );
        request.set_header(
            HOST,
            HeaderEntry::new(HOST_DISPLAY, self.origin_host.as_str()),
        );

        original_host
    }
}
