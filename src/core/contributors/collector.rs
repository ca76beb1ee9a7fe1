use std::collections::HashMap;

use tracing::{debug, trace};

use super::coauthor::{coauthor_identifiers, CoauthorTally};
use super::record::{commit_history_url, is_bot, ContributorRecord, DateWindow, RepositoryRef};
use super::source::ContributorSource;
use crate::core::api::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOptions {
    pub window: Option<DateWindow>,
    pub acknowledge_coauthors: bool,
    pub resolve_coauthor_emails: bool,
    pub fetch_organisations: bool,
}

impl CollectOptions {
    /// Same flags over a different window.
    pub fn with_window(&self, window: Option<DateWindow>) -> Self {
        Self {
            window,
            ..self.clone()
        }
    }
}

/// Email to login lookups made during one run. Misses are remembered too.
#[derive(Debug, Default)]
pub struct IdentityCache {
    entries: HashMap<String, Option<String>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Login for `email`, or the email itself when no account matches.
    ///
    /// Failed lookups fall back to the email and are not cached.
    pub async fn resolve<S: ContributorSource>(&mut self, source: &S, email: &str) -> String {
        if let Some(cached) = self.entries.get(email) {
            return cached.clone().unwrap_or_else(|| email.to_string());
        }

        match source.find_user_by_email(email).await {
            Ok(found) => {
                trace!("resolved {} to {:?}", email, found);
                let login = found.clone().unwrap_or_else(|| email.to_string());
                self.entries.insert(email.to_string(), found);
                login
            }
            Err(e) => {
                debug!("user lookup for {} failed: {}", email, e);
                email.to_string()
            }
        }
    }
}

/// Produces the contributor rows for one repository at a time.
pub struct Collector<'a, S> {
    source: &'a S,
    web_url: &'a str,
    options: CollectOptions,
}

impl<'a, S: ContributorSource> Collector<'a, S> {
    pub fn new(source: &'a S, web_url: &'a str, options: CollectOptions) -> Self {
        Self {
            source,
            web_url,
            options,
        }
    }

    /// A collector over the same source and flags for another window.
    pub fn with_window(&self, window: Option<DateWindow>) -> Self {
        Self {
            source: self.source,
            web_url: self.web_url,
            options: self.options.with_window(window),
        }
    }

    /// Contributors of `repo` active in the configured window.
    ///
    /// Any failure talking to the source aborts the whole repository; partial
    /// lists are never returned.
    pub async fn collect(
        &self,
        repo: &RepositoryRef,
        cache: &mut IdentityCache,
    ) -> Result<Vec<ContributorRecord>, ApiError> {
        let window = self.options.window.as_ref();
        let mut records = Vec::new();

        for user in self.source.list_contributors(repo).await? {
            if is_bot(&user.login) {
                trace!("{}: skipping bot {}", repo, user.login);
                continue;
            }

            if let Some(window) = window {
                if !self.source.has_commits(repo, &user.login, window).await? {
                    trace!("{}: {} has no commits in {}", repo, user.login, window);
                    continue;
                }
            }

            let organisations = if self.options.fetch_organisations {
                self.source.list_user_organisations(&user.login).await?
            } else {
                Vec::new()
            };

            let commit_url = commit_history_url(self.web_url, repo, &user.login, window);
            records.push(
                ContributorRecord::new(
                    user.login,
                    user.avatar_url,
                    user.contribution_count,
                    commit_url,
                )
                .with_organisations(organisations),
            );
        }

        if self.options.acknowledge_coauthors {
            let coauthors = self.collect_coauthors(repo, cache).await?;
            debug!("{}: {} co-author identities", repo, coauthors.len());
            records.extend(coauthors);
        }

        debug!("{}: collected {} contributors", repo, records.len());
        Ok(records)
    }

    /// One record per identity named in co-author trailers within the window,
    /// counting trailer occurrences.
    pub async fn collect_coauthors(
        &self,
        repo: &RepositoryRef,
        cache: &mut IdentityCache,
    ) -> Result<Vec<ContributorRecord>, ApiError> {
        let window = self.options.window.as_ref();
        let commits = self.source.list_commits(repo, window).await?;

        let mut tally = CoauthorTally::new();
        for commit in &commits {
            for identifier in coauthor_identifiers(&commit.message) {
                let identifier = if self.options.resolve_coauthor_emails && identifier.contains('@')
                {
                    cache.resolve(self.source, &identifier).await
                } else {
                    identifier
                };
                tally.record(&identifier);
            }
        }

        let mut records = Vec::new();
        for (identifier, count) in tally.into_counts() {
            // unresolved emails have no account to look up
            let organisations = if self.options.fetch_organisations && !identifier.contains('@') {
                self.source.list_user_organisations(&identifier).await?
            } else {
                Vec::new()
            };

            let commit_url = commit_history_url(self.web_url, repo, &identifier, window);
            records.push(
                ContributorRecord::new(identifier, "", count, commit_url)
                    .with_organisations(organisations),
            );
        }
        Ok(records)
    }
}
