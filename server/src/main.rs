use anyhow::Result;
use clap::Parser;
use engine::SearchEngine;
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// File listing the document paths to index, one per line
    #[arg(long)]
    docs: String,
    /// File listing noise words to exclude, one per line
    #[arg(long)]
    noise: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    // Build the whole index up front; further documents arrive over HTTP.
    let engine = SearchEngine::build_from_files(&args.docs, &args.noise)?;
    tracing::info!(
        documents = engine.document_count(),
        keywords = engine.keyword_count(),
        "index built"
    );
    let app = build_app(engine);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
