use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = edge_host_rewriter::cli::Cli::parse();
    if let Err(e) = edge_host_rewriter::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
