//! Lambda@Edge binding.
//!
//! [`run`] registers [`handle`] with the Lambda runtime client. Each
//! invocation deserializes one origin-request event, rewrites it, and
//! returns the request for CloudFront to forward.

use lambda_runtime::{service_fn, LambdaEvent};

use crate::edge::hostname::strip_port;
use crate::edge::{EdgeEvent, HeaderRewriter, Request};
use crate::error::EdgeError;

/// Process a single invocation.
pub fn handle(
    rewriter: &HeaderRewriter,
    event: LambdaEvent<EdgeEvent>,
) -> Result<Request, EdgeError> {
    let request_id = event.context.request_id;

    let mut request = event.payload.into_first_request().inspect_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "rejecting edge event");
    })?;

    let original_host = rewriter.rewrite_request(&mut request);

    tracing::debug!(
        request_id = %request_id,
        original_host = %original_host,
        client_host = %strip_port(request.client_host()),
        origin_host = %rewriter.origin_host(),
        "host rewritten"
    );

    Ok(request)
}

/// Serve invocations until the runtime shuts the process down.
pub async fn run(rewriter: HeaderRewriter) -> Result<(), EdgeError> {
    let rewriter = &rewriter;

    tracing::info!(origin_host = %rewriter.origin_host(), "edge host rewriter started");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<EdgeEvent>| async move {
        handle(rewriter, event).map_err(lambda_runtime::Error::from)
    }))
    .await
    .map_err(|source| EdgeError::Runtime { source })
}
