//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to [`serve`],
//! [`rewrite`], or [`validate`]. With no subcommand the binary serves
//! Lambda invocations, since the runtime starts it without arguments.

pub mod rewrite;
pub mod serve;
pub mod validate;

use crate::cli::{Cli, Commands, GlobalArgs};
use crate::config;
use crate::edge::HeaderRewriter;
use crate::error::EdgeError;
use crate::logging;

pub async fn dispatch(cli: Cli) -> Result<(), EdgeError> {
    match cli.command {
        Some(Commands::Validate(ref args)) => validate::execute(args),
        Some(Commands::Rewrite(ref args)) => {
            let rewriter = prepare(&cli.global)?;
            rewrite::execute(&rewriter, args).await
        }
        Some(Commands::Serve) | None => serve::execute(prepare(&cli.global)?).await,
    }
}

/// Initialize logging and build the rewriter from the resolved config.
fn prepare(global: &GlobalArgs) -> Result<HeaderRewriter, EdgeError> {
    logging::init(
        &global.log_level,
        logging::resolve_format(global.pretty, global.json),
    );

    let config = config::load(global.config.as_deref(), global.origin_host.as_deref())?;
    Ok(HeaderRewriter::new(config.origin_host))
}
