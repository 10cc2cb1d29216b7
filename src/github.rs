use crate::error::{Result, StarHistoryError};
use crate::models::GitHubRepo;
use reqwest::Client;
use tracing::debug;

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "Cloudflare-Worker-Star-History";
const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL.to_string())
    }

    /// Build a client against a non-default API base URL. Tests point this
    /// at a local stub server.
    pub fn with_base_url(token: Option<String>, base_url: String) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(GitHubClient {
            client,
            base_url,
            token,
        })
    }

    /// Fetch the first page of a user's repositories, most recently updated
    /// first. A single page is all this service ever looks at; users with
    /// more than 100 repositories are ranked from that page alone.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.base_url, username, PER_PAGE
        );

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StarHistoryError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            return Err(StarHistoryError::ApiError(status.as_u16()));
        }

        if let Some(remaining) = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
        {
            debug!("GitHub rate limit remaining: {}", remaining);
        }

        // Read the body before parsing so transport and parse failures stay
        // distinct error variants.
        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;

        Ok(repos)
    }
}
