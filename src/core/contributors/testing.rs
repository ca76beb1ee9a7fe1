//! In-memory data source for unit tests.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::record::{DateWindow, RepositoryRef};
use super::source::{CommitMessage, ContributorSource, RepoContributor, SponsorLookup};
use crate::core::api::ApiError;

#[derive(Debug, Default)]
pub struct FakeSource {
    contributors: HashMap<String, Vec<RepoContributor>>,
    activity: HashMap<(String, String), Vec<NaiveDate>>,
    commits: HashMap<String, Vec<(NaiveDate, CommitMessage)>>,
    emails: HashMap<String, String>,
    organisations: HashMap<String, Vec<String>>,
    org_repositories: HashMap<String, Vec<RepositoryRef>>,
    failing: HashSet<String>,
    failing_commit_checks: HashSet<String>,
    sponsorable: HashSet<String>,
    sponsors_fail: bool,
    email_lookups: Cell<usize>,
    sponsor_queries: Cell<usize>,
}

fn not_found(what: &str) -> ApiError {
    ApiError::ApiResponse {
        status: 404,
        message: format!("{} not found", what),
    }
}

fn server_error(what: &str) -> ApiError {
    ApiError::ApiResponse {
        status: 500,
        message: format!("{} unavailable", what),
    }
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contributor(mut self, repo: &str, login: &str, count: u64) -> Self {
        self.contributors
            .entry(repo.to_string())
            .or_default()
            .push(RepoContributor {
                login: login.to_string(),
                avatar_url: format!("https://avatars.example/{}", login),
                contribution_count: count,
            });
        self
    }

    /// Records a commit by `login` on `date`, seen by `has_commits`.
    pub fn active(mut self, repo: &str, login: &str, date: NaiveDate) -> Self {
        self.activity
            .entry((repo.to_string(), login.to_string()))
            .or_default()
            .push(date);
        self
    }

    /// Records a commit dated 2024-01-15.
    pub fn commit(self, repo: &str, message: &str) -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        self.commit_on(repo, date, message)
    }

    pub fn commit_on(mut self, repo: &str, date: NaiveDate, message: &str) -> Self {
        let commits = self.commits.entry(repo.to_string()).or_default();
        let sha = format!("{:040x}", commits.len() + 1);
        commits.push((
            date,
            CommitMessage {
                sha,
                message: message.to_string(),
            },
        ));
        self
    }

    pub fn user_email(mut self, email: &str, login: &str) -> Self {
        self.emails.insert(email.to_string(), login.to_string());
        self
    }

    pub fn organisations(mut self, login: &str, orgs: &[&str]) -> Self {
        self.organisations.insert(
            login.to_string(),
            orgs.iter().map(|o| o.to_string()).collect(),
        );
        self
    }

    pub fn org_repository(mut self, org: &str, name: &str) -> Self {
        self.org_repositories
            .entry(org.to_string())
            .or_default()
            .push(RepositoryRef::new(org, name));
        self
    }

    /// Every call touching `repo` fails.
    pub fn failing(mut self, repo: &str) -> Self {
        self.failing.insert(repo.to_string());
        self
    }

    /// Only the per-author commit check fails for `repo`.
    pub fn failing_commit_check(mut self, repo: &str) -> Self {
        self.failing_commit_checks.insert(repo.to_string());
        self
    }

    pub fn sponsorable(mut self, login: &str) -> Self {
        self.sponsorable.insert(login.to_string());
        self
    }

    pub fn sponsors_fail(mut self) -> Self {
        self.sponsors_fail = true;
        self
    }

    pub fn email_lookups(&self) -> usize {
        self.email_lookups.get()
    }

    pub fn sponsor_queries(&self) -> usize {
        self.sponsor_queries.get()
    }

    fn check(&self, repo: &RepositoryRef) -> Result<(), ApiError> {
        if self.failing.contains(&repo.full_name()) {
            return Err(server_error(&repo.full_name()));
        }
        Ok(())
    }
}

impl ContributorSource for FakeSource {
    async fn list_contributors(
        &self,
        repo: &RepositoryRef,
    ) -> Result<Vec<RepoContributor>, ApiError> {
        self.check(repo)?;
        Ok(self
            .contributors
            .get(&repo.full_name())
            .cloned()
            .unwrap_or_default())
    }

    async fn has_commits(
        &self,
        repo: &RepositoryRef,
        author: &str,
        window: &DateWindow,
    ) -> Result<bool, ApiError> {
        self.check(repo)?;
        if self.failing_commit_checks.contains(&repo.full_name()) {
            return Err(server_error("commit search"));
        }
        Ok(self
            .activity
            .get(&(repo.full_name(), author.to_string()))
            .is_some_and(|dates| dates.iter().any(|d| window.contains(*d))))
    }

    async fn list_commits(
        &self,
        repo: &RepositoryRef,
        window: Option<&DateWindow>,
    ) -> Result<Vec<CommitMessage>, ApiError> {
        self.check(repo)?;
        Ok(self
            .commits
            .get(&repo.full_name())
            .into_iter()
            .flatten()
            .filter(|(date, _)| window.map_or(true, |w| w.contains(*date)))
            .map(|(_, commit)| commit.clone())
            .collect())
    }

    async fn list_repositories(&self, organization: &str) -> Result<Vec<RepositoryRef>, ApiError> {
        self.org_repositories
            .get(organization)
            .cloned()
            .ok_or_else(|| not_found(organization))
    }

    async fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryRef, ApiError> {
        let repo = RepositoryRef::new(owner, name);
        let full_name = repo.full_name();
        if self.contributors.contains_key(&full_name) || self.commits.contains_key(&full_name) {
            Ok(repo)
        } else {
            Err(not_found(&full_name))
        }
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        self.email_lookups.set(self.email_lookups.get() + 1);
        Ok(self.emails.get(email).cloned())
    }

    async fn list_user_organisations(&self, login: &str) -> Result<Vec<String>, ApiError> {
        Ok(self.organisations.get(login).cloned().unwrap_or_default())
    }
}

impl SponsorLookup for FakeSource {
    async fn has_sponsors_listing(&self, login: &str) -> Result<bool, ApiError> {
        self.sponsor_queries.set(self.sponsor_queries.get() + 1);
        if self.sponsors_fail {
            return Err(ApiError::GraphQl("Could not resolve to a User".to_string()));
        }
        Ok(self.sponsorable.contains(login))
    }
}
