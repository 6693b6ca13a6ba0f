//! `edge-host-rewriter serve` — handle Lambda@Edge invocations.

use crate::edge::HeaderRewriter;
use crate::error::EdgeError;
use crate::handler;

pub async fn execute(rewriter: HeaderRewriter) -> Result<(), EdgeError> {
    handler::run(rewriter).await
}
