use clap::Parser;
use colored::*;
use star_history_server::cli::Cli;
use star_history_server::error::Result;
use star_history_server::github::GitHubClient;
use star_history_server::server::{build_router, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Star History Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    if cli.github_token.is_some() {
        println!("🔑 GitHub token configured");
    } else {
        println!(
            "{}",
            "No GitHub token configured, unauthenticated rate limits apply".yellow()
        );
    }

    let github = Arc::new(GitHubClient::new(cli.github_token.clone())?);
    let app = build_router(AppState { github });

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);
    println!("\nPress Ctrl+C to stop the server\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("✅ Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    println!("\n🛑 Shutting down server...");
}
