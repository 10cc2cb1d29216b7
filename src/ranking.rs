use crate::models::GitHubRepo;

pub const MAX_RANKED_REPOS: usize = 10;

/// Rank a user's repositories by star count.
///
/// Forks are dropped first; the remainder is sorted by stars descending,
/// truncated to the top ten, and finally stripped of zero-star entries.
/// The sort is stable, so repositories with equal star counts keep the
/// order they arrived in from the API (most recently updated first).
/// The zero-star filter runs after truncation, so the result can hold
/// fewer than ten entries even when more starred repositories exist.
pub fn rank_repositories(repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    let mut ranked: Vec<GitHubRepo> = repos.into_iter().filter(|repo| !repo.fork).collect();

    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked.truncate(MAX_RANKED_REPOS);
    ranked.retain(|repo| repo.stargazers_count > 0);

    ranked
}
