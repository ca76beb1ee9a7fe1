use serde::Serialize;

use super::ReportMetadata;
use crate::core::contributors::ContributorRecord;
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub organization: Option<&'a str>,
    pub repository_list: &'a [String],
    pub sponsor_info: bool,
    pub link_to_profile: bool,
    pub contributors: &'a [ContributorRecord],
}

impl<'a> JsonReport<'a> {
    pub fn new(metadata: &'a ReportMetadata, contributors: &'a [ContributorRecord]) -> Self {
        Self {
            start_date: metadata.start_date(),
            end_date: metadata.end_date(),
            organization: metadata.organization.as_deref(),
            repository_list: &metadata.repository_list,
            sponsor_info: metadata.sponsor_info,
            link_to_profile: metadata.link_to_profile,
            contributors,
        }
    }
}

pub fn render(metadata: &ReportMetadata, contributors: &[ContributorRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(
        metadata,
        contributors,
    ))?)
}
