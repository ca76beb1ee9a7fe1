//! Contributor aggregation across repositories.

pub mod baseline;
pub mod coauthor;
pub mod collector;
pub mod grouping;
pub mod merge;
pub mod pipeline;
pub mod record;
pub mod source;
pub mod sponsor;

#[cfg(test)]
pub(crate) mod testing;

pub use baseline::{mark_new_contributors, BaselineClassifier};
pub use coauthor::{coauthor_identifiers, CoauthorTally};
pub use collector::{CollectOptions, Collector, IdentityCache};
pub use grouping::{group_by_organisation, OrganizationBucket, INDEPENDENT};
pub use merge::merge_contributors;
pub use pipeline::{aggregate, resolve_repositories, Aggregation, Pipeline, RepositorySelector};
pub use record::{
    commit_history_url, ContributorRecord, DateWindow, RepositoryRef, BOT_MARKER,
    PLATFORM_INCEPTION,
};
pub use source::{CommitMessage, ContributorSource, RepoContributor, SponsorLookup};
pub use sponsor::enrich_sponsors;
