use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::info;

use super::collector::{Collector, IdentityCache};
use super::pipeline::aggregate;
use super::record::{ContributorRecord, DateWindow, RepositoryRef};
use super::source::ContributorSource;

/// Marks contributors absent from the history before the reporting window as new.
#[derive(Debug, Clone, Copy)]
pub struct BaselineClassifier {
    inception: NaiveDate,
}

impl BaselineClassifier {
    pub fn new(inception: NaiveDate) -> Self {
        Self { inception }
    }

    pub fn baseline_window(&self, window: &DateWindow) -> Option<DateWindow> {
        window.baseline(self.inception)
    }

    /// Collects `[inception, window.start)` across `repos` with the same flags
    /// as the primary run, then flags every contributor not found there.
    /// A window starting at inception has no history, so everyone is new.
    pub async fn classify<S: ContributorSource>(
        &self,
        collector: &Collector<'_, S>,
        repos: &[RepositoryRef],
        window: &DateWindow,
        contributors: &mut [ContributorRecord],
        cache: &mut IdentityCache,
    ) {
        let returning = match self.baseline_window(window) {
            Some(baseline_window) => {
                info!("collecting returning contributors for {}", baseline_window);
                let baseline_collector = collector.with_window(Some(baseline_window));
                aggregate(&baseline_collector, repos, cache).await
            }
            None => {
                info!("{} starts at platform inception, no returning contributors", window);
                Vec::new()
            }
        };

        mark_new_contributors(contributors, &returning);
    }
}

/// Sets `new_contributor` on every record whose username is not in `returning`.
pub fn mark_new_contributors(contributors: &mut [ContributorRecord], returning: &[ContributorRecord]) {
    let known: HashSet<&str> = returning.iter().map(|r| r.username.as_str()).collect();
    for contributor in contributors.iter_mut() {
        contributor.new_contributor = !known.contains(contributor.username.as_str());
    }
}
