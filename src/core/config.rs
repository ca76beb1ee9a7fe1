//! Run configuration, validated before any request is made.

use std::path::PathBuf;

use chrono::NaiveDate;
use secrecy::SecretString;
use thiserror::Error;

use crate::cli::ReportArgs;
use crate::core::api::GitHubEndpoints;
use crate::core::contributors::record::DATE_FORMAT;
use crate::core::contributors::{CollectOptions, DateWindow, RepositoryRef, RepositorySelector};

pub const DEFAULT_OUTPUT_FILENAME: &str = "contributors";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ORGANIZATION and REPOSITORY environment variables were not set. Please set one")]
    MissingSelector,

    #[error("GH_TOKEN environment variable not set")]
    MissingToken,

    #[error("{name} environment variable not in the format YYYY-MM-DD: {value}")]
    InvalidDate { name: &'static str, value: String },

    #[error("START_DATE and END_DATE must be set together")]
    IncompleteWindow,

    #[error("START_DATE {start} is after END_DATE {end}")]
    StartAfterEnd { start: String, end: String },

    #[error("repository `{0}` is not in the format owner/name")]
    InvalidRepository(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub struct ReportConfig {
    pub organization: Option<String>,
    pub repository_list: Vec<String>,
    pub selector: RepositorySelector,
    pub token: SecretString,
    pub endpoints: GitHubEndpoints,
    pub window: Option<DateWindow>,
    pub sponsor_info: bool,
    pub link_to_profile: bool,
    pub show_organisations: Vec<String>,
    pub acknowledge_coauthors: bool,
    pub resolve_coauthor_emails: bool,
    pub output_filename: String,
}

impl ReportConfig {
    pub fn from_args(args: ReportArgs) -> Result<Self> {
        let organization = non_empty(args.organization);
        let repository_list = args
            .repository
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        let selector = match (&organization, repository_list.is_empty()) {
            (Some(org), _) => RepositorySelector::Organization(org.clone()),
            (None, false) => RepositorySelector::Repositories(
                repository_list
                    .iter()
                    .map(|r| parse_repository(r))
                    .collect::<Result<Vec<_>>>()?,
            ),
            (None, true) => return Err(ConfigError::MissingSelector),
        };

        let token = non_empty(args.token)
            .map(SecretString::from)
            .ok_or(ConfigError::MissingToken)?;

        let start = non_empty(args.start_date)
            .map(|v| parse_date("START_DATE", &v))
            .transpose()?;
        let end = non_empty(args.end_date)
            .map(|v| parse_date("END_DATE", &v))
            .transpose()?;
        let window = build_window(start, end)?;

        let output_filename =
            non_empty(Some(args.output_filename)).unwrap_or_else(|| DEFAULT_OUTPUT_FILENAME.to_string());

        Ok(Self {
            organization,
            repository_list,
            selector,
            token,
            endpoints: GitHubEndpoints::for_server(args.enterprise_url.as_deref()),
            window,
            sponsor_info: args.sponsor_info,
            link_to_profile: args.link_to_profile,
            show_organisations: args
                .show_organisations
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            acknowledge_coauthors: args.acknowledge_coauthors,
            resolve_coauthor_emails: args.resolve_coauthor_emails,
            output_filename,
        })
    }

    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            window: self.window,
            acknowledge_coauthors: self.acknowledge_coauthors,
            resolve_coauthor_emails: self.resolve_coauthor_emails,
            fetch_organisations: !self.show_organisations.is_empty(),
        }
    }

    pub fn markdown_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.md", self.output_filename))
    }

    pub fn json_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.json", self.output_filename))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Comma separated values, trimmed, empty entries dropped.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_date(name: &'static str, value: &str) -> Result<NaiveDate> {
    let invalid = || ConfigError::InvalidDate {
        name,
        value: value.to_string(),
    };

    if value.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

pub fn parse_repository(value: &str) -> Result<RepositoryRef> {
    match value.split_once('/') {
        Some((owner, name))
            if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
        {
            Ok(RepositoryRef::new(owner, name))
        }
        _ => Err(ConfigError::InvalidRepository(value.to_string())),
    }
}

fn build_window(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Option<DateWindow>> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(ConfigError::StartAfterEnd {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        }),
        (Some(start), Some(end)) => Ok(Some(DateWindow::new(start, end))),
        (None, None) => Ok(None),
        _ => Err(ConfigError::IncompleteWindow),
    }
}
