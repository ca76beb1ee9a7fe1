//! Markdown and JSON renderings of an aggregation.

pub mod json;
pub mod markdown;

use std::path::Path;

use crate::core::config::ReportConfig;
use crate::core::contributors::{ContributorRecord, DateWindow};
use crate::error::{CliError, Result};

/// Run metadata shared by both writers.
#[derive(Debug, Clone, Default)]
pub struct ReportMetadata {
    pub window: Option<DateWindow>,
    pub organization: Option<String>,
    pub repository_list: Vec<String>,
    pub sponsor_info: bool,
    pub link_to_profile: bool,
    pub show_organisations: Vec<String>,
    pub web_url: String,
}

impl ReportMetadata {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            window: config.window,
            organization: config.organization.clone(),
            repository_list: config.repository_list.clone(),
            sponsor_info: config.sponsor_info,
            link_to_profile: config.link_to_profile,
            show_organisations: config.show_organisations.clone(),
            web_url: config.endpoints.web_url.clone(),
        }
    }

    pub fn start_date(&self) -> Option<String> {
        self.window.map(|w| w.since())
    }

    pub fn end_date(&self) -> Option<String> {
        self.window.map(|w| w.until())
    }
}

pub fn write_reports(
    metadata: &ReportMetadata,
    contributors: &[ContributorRecord],
    markdown_path: &Path,
    json_path: &Path,
) -> Result<()> {
    write_file(markdown_path, &markdown::render(metadata, contributors))?;
    write_file(json_path, &json::render(metadata, contributors)?)?;
    Ok(())
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
