use clap::Parser;

#[derive(Parser)]
#[command(name = "star-history-server")]
#[command(about = "Star History Server - Ranks a GitHub user's most-starred repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value = "8787")]
    pub port: u16,

    /// GitHub API token, used only to raise upstream rate limits
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,
}
