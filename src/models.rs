use serde::{Deserialize, Serialize};

/// Repository record as returned by the GitHub repository listing API.
///
/// Only the fields this service reads are deserialized; the rest of the
/// upstream payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub full_name: String,
    pub stargazers_count: u32,
    pub description: Option<String>,
    pub language: Option<String>,
    pub html_url: String,
    pub fork: bool,
}

/// The public projection of a repository exposed in the JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRepository {
    pub name: String,
    pub full_name: String,
    pub stars: u32,
    pub description: Option<String>,
    pub language: Option<String>,
    pub url: String,
}

impl From<GitHubRepo> for RankedRepository {
    fn from(repo: GitHubRepo) -> Self {
        RankedRepository {
            name: repo.name,
            full_name: repo.full_name,
            stars: repo.stargazers_count,
            description: repo.description,
            language: repo.language,
            url: repo.html_url,
        }
    }
}

/// JSON success payload. Field order here is the serialized order.
#[derive(Debug, Serialize)]
pub struct StarHistoryResponse {
    pub username: String,
    pub total_repos_found: usize,
    pub starred_repos_count: usize,
    pub star_history_url: String,
    pub repositories: Vec<RankedRepository>,
}
