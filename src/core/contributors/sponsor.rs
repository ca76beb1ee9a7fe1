use tracing::{debug, info};

use super::record::ContributorRecord;
use super::source::SponsorLookup;
use crate::core::api::ApiError;

pub fn sponsor_url(web_url: &str, username: &str) -> String {
    format!("{}/sponsors/{}", web_url.trim_end_matches('/'), username)
}

/// Fills `sponsor_info` for every contributor with a sponsorship listing.
///
/// Email identities are skipped. The first failed query aborts the step.
pub async fn enrich_sponsors<L: SponsorLookup>(
    lookup: &L,
    web_url: &str,
    contributors: &mut [ContributorRecord],
) -> Result<(), ApiError> {
    let mut sponsorable = 0usize;

    for contributor in contributors.iter_mut() {
        if contributor.username.contains('@') {
            debug!("skipping sponsor lookup for {}", contributor.username);
            continue;
        }

        if lookup.has_sponsors_listing(&contributor.username).await? {
            contributor.sponsor_info = sponsor_url(web_url, &contributor.username);
            sponsorable += 1;
        }
    }

    info!("{} of {} contributors are sponsorable", sponsorable, contributors.len());
    Ok(())
}
