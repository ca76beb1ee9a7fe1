use std::future::Future;

use serde::Deserialize;

use super::record::{DateWindow, RepositoryRef};
use crate::core::api::ApiError;

/// One entry of a repository's all-time contributor list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoContributor {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(rename = "contributions", default)]
    pub contribution_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub sha: String,
    pub message: String,
}

/// The directory and commit history service contributors are collected from.
///
/// Every call may fail; collectors treat a failure as fatal for the repository
/// being processed and nothing else.
pub trait ContributorSource {
    fn list_contributors(
        &self,
        repo: &RepositoryRef,
    ) -> impl Future<Output = Result<Vec<RepoContributor>, ApiError>>;

    /// Whether `author` authored at least one commit between `since` and `until`.
    fn has_commits(
        &self,
        repo: &RepositoryRef,
        author: &str,
        window: &DateWindow,
    ) -> impl Future<Output = Result<bool, ApiError>>;

    fn list_commits(
        &self,
        repo: &RepositoryRef,
        window: Option<&DateWindow>,
    ) -> impl Future<Output = Result<Vec<CommitMessage>, ApiError>>;

    fn list_repositories(
        &self,
        organization: &str,
    ) -> impl Future<Output = Result<Vec<RepositoryRef>, ApiError>>;

    fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Result<RepositoryRef, ApiError>>;

    /// Login of the first account whose public email matches `email`.
    fn find_user_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;

    fn list_user_organisations(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>>;
}

/// Answers whether an account has a public sponsorship listing.
pub trait SponsorLookup {
    fn has_sponsors_listing(&self, login: &str) -> impl Future<Output = Result<bool, ApiError>>;
}
