use axum::http::StatusCode;
use axum::Router;
use star_history_server::github::GitHubClient;
use star_history_server::models::GitHubRepo;
use star_history_server::server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;

pub fn repo(name: &str, stars: u32, fork: bool) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        stargazers_count: stars,
        description: Some(format!("{} repository", name)),
        language: Some("Rust".to_string()),
        html_url: format!("https://github.com/octocat/{}", name),
        fork,
    }
}

/// Spawn a stub upstream that answers every request with the given status
/// and body, standing in for the GitHub API on an ephemeral local port.
pub async fn spawn_upstream(status: StatusCode, body: String) -> SocketAddr {
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, body) }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub upstream");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Stub upstream failed");
    });

    addr
}

/// Build the service router wired to a stub upstream.
pub async fn router_with_upstream(status: StatusCode, body: String) -> Router {
    let addr = spawn_upstream(status, body).await;
    let github = GitHubClient::with_base_url(None, format!("http://{}", addr))
        .expect("Failed to create client");

    build_router(AppState {
        github: Arc::new(github),
    })
}
