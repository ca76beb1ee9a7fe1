use chrono::NaiveDate;
use tracing::{info, warn};

use super::baseline::BaselineClassifier;
use super::collector::{CollectOptions, Collector, IdentityCache};
use super::merge::merge_contributors;
use super::record::{ContributorRecord, RepositoryRef, PLATFORM_INCEPTION};
use super::source::ContributorSource;
use crate::core::api::ApiError;

/// Which repositories a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySelector {
    Organization(String),
    Repositories(Vec<RepositoryRef>),
}

/// Collects every repository in order and merges the results.
///
/// Repositories whose collection fails are logged and left out.
pub async fn aggregate<S: ContributorSource>(
    collector: &Collector<'_, S>,
    repos: &[RepositoryRef],
    cache: &mut IdentityCache,
) -> Vec<ContributorRecord> {
    let mut per_repository = Vec::with_capacity(repos.len());

    for repo in repos {
        match collector.collect(repo, cache).await {
            Ok(records) => per_repository.push(records),
            Err(e) => warn!("error getting contributors for repository {}: {}", repo, e),
        }
    }

    merge_contributors(per_repository)
}

/// Resolves the selector into concrete repositories.
///
/// Listing an organisation must succeed. Explicitly named repositories that
/// cannot be fetched are skipped.
pub async fn resolve_repositories<S: ContributorSource>(
    source: &S,
    selector: &RepositorySelector,
) -> Result<Vec<RepositoryRef>, ApiError> {
    match selector {
        RepositorySelector::Organization(org) => {
            let repos = source.list_repositories(org).await?;
            info!("found {} repositories in {}", repos.len(), org);
            Ok(repos)
        }
        RepositorySelector::Repositories(wanted) => {
            let mut repos = Vec::with_capacity(wanted.len());
            for repo in wanted {
                match source.get_repository(&repo.owner, &repo.name).await {
                    Ok(found) => repos.push(found),
                    Err(e) => warn!("error getting repository {}: {}", repo, e),
                }
            }
            Ok(repos)
        }
    }
}

/// The aggregation pipeline: resolve, collect, merge and classify.
pub struct Pipeline<'a, S> {
    source: &'a S,
    web_url: &'a str,
    options: CollectOptions,
    inception: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub repositories: Vec<RepositoryRef>,
    pub contributors: Vec<ContributorRecord>,
}

impl<'a, S: ContributorSource> Pipeline<'a, S> {
    pub fn new(source: &'a S, web_url: &'a str, options: CollectOptions) -> Self {
        Self {
            source,
            web_url,
            options,
            inception: PLATFORM_INCEPTION,
        }
    }

    pub fn with_inception(mut self, inception: NaiveDate) -> Self {
        self.inception = inception;
        self
    }

    pub async fn run(&self, selector: &RepositorySelector) -> Result<Aggregation, ApiError> {
        let repositories = resolve_repositories(self.source, selector).await?;
        let collector = Collector::new(self.source, self.web_url, self.options.clone());
        let mut cache = IdentityCache::new();

        let mut contributors = aggregate(&collector, &repositories, &mut cache).await;
        info!(
            "collected {} contributors from {} repositories",
            contributors.len(),
            repositories.len()
        );

        if let Some(window) = self.options.window {
            BaselineClassifier::new(self.inception)
                .classify(
                    &collector,
                    &repositories,
                    &window,
                    &mut contributors,
                    &mut cache,
                )
                .await;
        }

        Ok(Aggregation {
            repositories,
            contributors,
        })
    }
}
