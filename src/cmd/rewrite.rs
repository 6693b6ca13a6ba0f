//! `edge-host-rewriter rewrite` — apply the rewrite to a captured event.
//!
//! Reads an origin-request event as JSON from a file or stdin and prints
//! the request CloudFront would forward.

use tokio::io::AsyncReadExt;

use crate::cli::RewriteArgs;
use crate::edge::{EdgeEvent, HeaderRewriter, Request};
use crate::error::EdgeError;

pub async fn execute(rewriter: &HeaderRewriter, args: &RewriteArgs) -> Result<(), EdgeError> {
    let content = match args.event {
        Some(ref path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let request = rewrite_json(rewriter, &content)?;

    let output = if args.compact {
        serde_json::to_string(&request)
    } else {
        serde_json::to_string_pretty(&request)
    }
    .map_err(|source| EdgeError::OutputSerialize { source })?;

    println!("{output}");
    Ok(())
}

/// Parse an event document and rewrite it.
pub fn rewrite_json(rewriter: &HeaderRewriter, content: &str) -> Result<Request, EdgeError> {
    let event: EdgeEvent =
        serde_json::from_str(content).map_err(|source| EdgeError::EventParse { source })?;
    rewriter.rewrite(event)
}
