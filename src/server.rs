use crate::chart::build_star_history_url;
use crate::error::{Result, StarHistoryError};
use crate::github::GitHubClient;
use crate::models::{RankedRepository, StarHistoryResponse};
use crate::ranking::rank_repositories;
use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

const USAGE: &str = "Usage: GET /{username}";

/// Shared state for request handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GitHubClient>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Route an incoming request.
///
/// The only recognized shape is `GET /{username}` — exactly one non-empty
/// path segment; everything else gets the usage message. Routing on raw
/// path segments keeps the username verbatim (no percent-decoding) and
/// accepts a trailing slash.
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let segments: Vec<&str> = request
        .uri()
        .path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    if request.method() != Method::GET || segments.len() != 1 {
        return (StatusCode::BAD_REQUEST, USAGE).into_response();
    }

    star_history(&state, segments[0]).await
}

/// Error boundary around the fetch → rank → respond pipeline. Upstream 404
/// stays a distinct terminal case; every other failure is logged and
/// reduced to a generic 500 body.
async fn star_history(state: &AppState, username: &str) -> Response {
    match handle_star_history(state, username).await {
        Ok(response) => response,
        Err(StarHistoryError::UserNotFound(_)) => (
            StatusCode::NOT_FOUND,
            format!("User '{}' not found", username),
        )
            .into_response(),
        Err(err) => {
            error!("Error fetching repositories for '{}': {}", username, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error: {}", err),
            )
                .into_response()
        }
    }
}

async fn handle_star_history(state: &AppState, username: &str) -> Result<Response> {
    let repos = state.github.fetch_user_repos(username).await?;
    let total_repos_found = repos.len();

    let ranked = rank_repositories(repos);
    if ranked.is_empty() {
        return Ok((
            StatusCode::OK,
            format!("No starred repositories found for user '{}'", username),
        )
            .into_response());
    }

    let star_history_url = build_star_history_url(username, &ranked);

    let payload = StarHistoryResponse {
        username: username.to_string(),
        total_repos_found,
        starred_repos_count: ranked.len(),
        star_history_url,
        repositories: ranked.into_iter().map(RankedRepository::from).collect(),
    };

    let body = serde_json::to_string_pretty(&payload)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        body,
    )
        .into_response())
}
