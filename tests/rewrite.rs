//! Integration tests for the `Host` rewrite on full CloudFront events.

use edge_host_rewriter::cmd::rewrite::rewrite_json;
use edge_host_rewriter::config::model::DEFAULT_ORIGIN_HOST;
use edge_host_rewriter::edge::event::Record;
use edge_host_rewriter::edge::{EdgeEvent, HeaderEntry, HeaderMap, HeaderRewriter, Request};
use edge_host_rewriter::error::EdgeError;

fn load_event() -> String {
    let path = "example/origin-request.json";
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"))
}

fn record(host: &str) -> Record {
    let mut event = EdgeEvent::from_request(Request::with_headers(host_only(host)));
    event.records.remove(0)
}

fn rewriter() -> HeaderRewriter {
    HeaderRewriter::new(DEFAULT_ORIGIN_HOST)
}

fn host_only(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("host".into(), vec![HeaderEntry::new("Host", value)]);
    headers
}

#[test]
fn single_host_is_preserved_and_replaced() {
    let event = EdgeEvent::from_request(Request::with_headers(host_only("example.com")));
    let request = rewriter().rewrite(event).unwrap();

    let out = serde_json::to_value(&request).unwrap();
    assert_eq!(
        out["headers"]["host"],
        serde_json::json!([{"key": "Host", "value": "main.d1wc36cp4amanq.amplifyapp.com"}])
    );
    assert_eq!(
        out["headers"]["x-original-host"],
        serde_json::json!([{"key": "x-original-host", "value": "example.com"}])
    );
}

#[test]
fn no_headers_preserves_empty_host() {
    let request = rewrite_json(
        &rewriter(),
        r#"{"Records": [{"cf": {"request": {"headers": {}}}}]}"#,
    )
    .unwrap();

    assert_eq!(request.first_value("x-original-host"), Some(""));
    assert_eq!(request.first_value("host"), Some(DEFAULT_ORIGIN_HOST));
}

#[test]
fn empty_records_fail() {
    let err = rewrite_json(&rewriter(), r#"{"Records": []}"#).unwrap_err();
    assert!(matches!(err, EdgeError::EmptyEvent));
}

#[test]
fn rewriting_twice_keeps_origin_host() {
    let rewriter = rewriter();
    let first = rewriter
        .rewrite(EdgeEvent::from_request(Request::with_headers(host_only("a.example.com"))))
        .unwrap();
    assert_eq!(first.first_value("host"), Some(DEFAULT_ORIGIN_HOST));

    let second = rewriter
        .rewrite(EdgeEvent::from_request(Request::with_headers(first.headers)))
        .unwrap();
    assert_eq!(second.first_value("host"), Some(DEFAULT_ORIGIN_HOST));
    assert_eq!(second.first_value("x-original-host"), Some(DEFAULT_ORIGIN_HOST));
}

#[test]
fn preserves_host_for_many_values() {
    let rewriter = rewriter();
    for host in ["example.com", "shop.example.com:8443", "", "UPPER.Example.COM"] {
        let request = rewriter
            .rewrite(EdgeEvent::from_request(Request::with_headers(host_only(host))))
            .unwrap();
        assert_eq!(request.first_value("x-original-host"), Some(host));
    }
}

#[test]
fn other_headers_are_untouched() {
    let content = load_event();
    let event: EdgeEvent = serde_json::from_str(&content).unwrap();
    let before = event.records[0].cf.request.headers.clone();

    let request = rewriter().rewrite(event).unwrap();

    for (name, entries) in &before {
        if name == "host" || name == "x-original-host" {
            continue;
        }
        assert_eq!(&request.headers[name], entries, "header {name} changed");
    }
    assert_eq!(request.headers.len(), before.len() + 1);
    assert_eq!(request.headers["cookie"].len(), 2);
}

#[test]
fn other_request_fields_pass_through() {
    let content = load_event();
    let input: serde_json::Value = serde_json::from_str(&content).unwrap();
    let request = rewrite_json(&rewriter(), &content).unwrap();
    let output = serde_json::to_value(&request).unwrap();

    let original = &input["Records"][0]["cf"]["request"];
    for field in ["clientIp", "method", "origin", "querystring", "uri"] {
        assert_eq!(output[field], original[field], "field {field} changed");
    }
    assert!(output.get("config").is_none());
    assert_eq!(output["headers"]["x-original-host"][0]["value"], "shop.example.com");
}

#[test]
fn client_host_resolves_after_rewrite() {
    let request = rewrite_json(&rewriter(), &load_event()).unwrap();
    assert_eq!(request.client_host(), "shop.example.com");
}

#[test]
fn only_first_record_is_rewritten() {
    let event = EdgeEvent {
        records: vec![record("first.example.com"), record("second.example.com")],
    };

    let request = rewriter().rewrite(event).unwrap();
    assert_eq!(request.first_value("x-original-host"), Some("first.example.com"));
}

#[test]
fn custom_origin_host_is_used() {
    let rewriter = HeaderRewriter::new("origin.internal:8443");
    let request = rewriter
        .rewrite(EdgeEvent::from_request(Request::with_headers(host_only("example.com"))))
        .unwrap();
    assert_eq!(
        request.headers["host"],
        vec![HeaderEntry::new("Host", "origin.internal:8443")]
    );
}
