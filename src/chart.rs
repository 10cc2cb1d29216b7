use crate::models::GitHubRepo;
use url::form_urlencoded;

const STAR_HISTORY_SVG_URL: &str = "https://api.star-history.com/svg";

/// Build the star-history chart URL for a ranked repository list.
///
/// The `repos` query parameter is the comma-joined `{username}/{name}`
/// list, form-urlencoded as one value.
pub fn build_star_history_url(username: &str, repos: &[GitHubRepo]) -> String {
    let repo_list = repos
        .iter()
        .map(|repo| format!("{}/{}", username, repo.name))
        .collect::<Vec<_>>()
        .join(",");

    let encoded: String = form_urlencoded::byte_serialize(repo_list.as_bytes()).collect();

    format!("{}?repos={}&type=Date", STAR_HISTORY_SVG_URL, encoded)
}
