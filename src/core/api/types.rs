use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOwner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiRepository {
    pub name: String,
    pub full_name: String,
    pub owner: ApiOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommitDetail {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub sha: String,
    pub commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiOrganization {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchItem {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct UserSearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<UserSearchItem>,
}

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    pub fn error_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Deserialize)]
pub struct SponsorListingOwner {
    #[serde(rename = "hasSponsorsListing", default)]
    pub has_sponsors_listing: bool,
}

#[derive(Debug, Deserialize)]
pub struct SponsorListingData {
    #[serde(rename = "repositoryOwner", default)]
    pub repository_owner: Option<SponsorListingOwner>,
}
