use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Logins containing this marker belong to automation accounts and are never reported.
pub const BOT_MARKER: &str = "[bot]";

/// Date GitHub opened to the public. Baseline windows start here.
pub const PLATFORM_INCEPTION: NaiveDate = match NaiveDate::from_ymd_opt(2008, 2, 29) {
    Some(date) => date,
    None => panic!("invalid platform inception date"),
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn is_bot(login: &str) -> bool {
    login.contains(BOT_MARKER)
}

/// One contributor row, either per repository (before merge) or per identity (after merge).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    pub username: String,
    pub new_contributor: bool,
    pub avatar_url: String,
    pub contribution_count: u64,
    pub commit_url: String,
    pub sponsor_info: String,
    #[serde(default)]
    pub organisations: Vec<String>,
}

impl ContributorRecord {
    pub fn new(
        username: impl Into<String>,
        avatar_url: impl Into<String>,
        contribution_count: u64,
        commit_url: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            avatar_url: avatar_url.into(),
            contribution_count,
            commit_url: commit_url.into(),
            ..Default::default()
        }
    }

    pub fn with_organisations(mut self, organisations: Vec<String>) -> Self {
        self.organisations = organisations;
        self
    }

    pub fn is_sponsorable(&self) -> bool {
        !self.sponsor_info.is_empty()
    }
}

/// An inclusive `[start, end]` reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The days from `inception` up to the day before this window starts.
    ///
    /// `None` when the window starts on or before `inception`.
    pub fn baseline(&self, inception: NaiveDate) -> Option<Self> {
        self.start
            .pred_opt()
            .filter(|end| *end >= inception)
            .map(|end| Self {
                start: inception,
                end,
            })
    }

    pub fn since(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn until(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// First second of `start`, for API `since` filters.
    pub fn since_timestamp(&self) -> String {
        format!("{}T00:00:00Z", self.since())
    }

    /// Last second of `end`; a bare date would stop at midnight.
    pub fn until_timestamp(&self) -> String {
        format!("{}T23:59:59Z", self.until())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.since(), self.until())
    }
}

/// A repository addressed as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Deep link to a repository's commit history filtered by author and, optionally, a window.
pub fn commit_history_url(
    web_url: &str,
    repo: &RepositoryRef,
    author: &str,
    window: Option<&DateWindow>,
) -> String {
    let mut url = format!(
        "{}/{}/commits?author={}",
        web_url.trim_end_matches('/'),
        repo.full_name(),
        urlencoding::encode(author)
    );
    if let Some(window) = window {
        url.push_str(&format!("&since={}&until={}", window.since(), window.until()));
    }
    url
}
