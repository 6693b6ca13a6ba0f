//! Typed wire representation of a CloudFront Lambda@Edge request event.
//!
//! Only the pieces the rewriter touches are modelled as fields. Everything
//! else CloudFront sends (`uri`, `method`, `querystring`, `origin`, the
//! `cf.config` block, ...) is captured in flattened maps and serialized back
//! unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::EdgeError;

/// Lower-cased header name to its ordered list of entries.
pub type HeaderMap = BTreeMap<String, Vec<HeaderEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EdgeEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<Record>,
}

impl EdgeEvent {
    #[must_use]
    pub fn from_request(request: Request) -> Self {
        Self {
            records: vec![Record {
                cf: CfData {
                    request,
                    extra: Map::new(),
                },
                extra: Map::new(),
            }],
        }
    }

    /// Take the first record's request; records after it are dropped.
    pub fn into_first_request(self) -> Result<Request, EdgeError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(EdgeError::EmptyEvent)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Record {
    pub cf: CfData,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CfData {
    pub request: Request,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Request {
    #[serde(default)]
    pub headers: HeaderMap,

    /// Request fields other than `headers`, passed through verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Request {
    #[must_use]
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            headers,
            fields: Map::new(),
        }
    }

    /// Value of the first entry stored under `name` (exact map key match).
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|entries| entries.first())
            .map(|entry| entry.value.as_str())
    }

    /// Replace every entry under `name` with a single entry.
    pub fn set_header(&mut self, name: &str, entry: HeaderEntry) {
        self.headers.insert(name.to_string(), vec![entry]);
    }

    /// Host the client addressed, as resolved by the origin application.
    #[must_use]
    pub fn client_host(&self) -> &str {
        super::hostname::resolve_client_host(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderEntry {
    /// Display name; CloudFront allows it to be omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    pub value: String,
}

impl HeaderEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }
}
