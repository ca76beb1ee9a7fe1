use std::time::Duration;

use async_stream::stream as async_stream;
use futures::{Stream, TryStreamExt};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::error::ApiError;
use super::types::{
    ApiCommit, ApiOrganization, ApiRepository, GraphQlRequest, GraphQlResponse,
    SponsorListingData, UserSearchResponse,
};
use crate::core::contributors::{
    CommitMessage, ContributorSource, DateWindow, RepoContributor, RepositoryRef, SponsorLookup,
};

pub const API_BASE_URL: &str = "https://api.github.com";
pub const WEB_BASE_URL: &str = "https://github.com";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub const API_VERSION: &str = "2022-11-28";
pub const REQUEST_TIMEOUT: u64 = 30;
pub const MAX_PAGE_SIZE: usize = 100;

const SPONSOR_LISTING_QUERY: &str = r#"
query($username: String!) {
    repositoryOwner(login: $username) {
        ... on User {
            hasSponsorsListing
        }
    }
}
"#;

/// Where the REST API, the GraphQL API and the web UI live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubEndpoints {
    pub api_url: String,
    pub graphql_url: String,
    pub web_url: String,
}

impl GitHubEndpoints {
    pub fn github_com() -> Self {
        Self {
            api_url: API_BASE_URL.to_string(),
            graphql_url: format!("{}/graphql", API_BASE_URL),
            web_url: WEB_BASE_URL.to_string(),
        }
    }

    /// Endpoints of a GitHub Enterprise Server instance at `base_url`.
    pub fn enterprise(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            api_url: format!("{}/api/v3", base),
            graphql_url: format!("{}/api/graphql", base),
            web_url: base.to_string(),
        }
    }

    pub fn for_server(enterprise_url: Option<&str>) -> Self {
        match enterprise_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Self::enterprise(url),
            None => Self::github_com(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    endpoints: GitHubEndpoints,
}

impl GitHubClient {
    pub fn new(token: &SecretString, endpoints: GitHubEndpoints) -> Result<Self, ApiError> {
        Self::build(Some(token), endpoints)
    }

    /// Unauthenticated client talking to `base_url` for both APIs.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        let base = base_url.trim_end_matches('/');
        Self::build(
            None,
            GitHubEndpoints {
                api_url: base.to_string(),
                graphql_url: format!("{}/graphql", base),
                web_url: WEB_BASE_URL.to_string(),
            },
        )
    }

    fn build(token: Option<&SecretString>, endpoints: GitHubEndpoints) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(API_VERSION),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, endpoints })
    }

    pub fn web_url(&self) -> &str {
        &self.endpoints.web_url
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok());
        if matches!(status, StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS)
            && remaining == Some("0")
        {
            let reset = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            return Err(ApiError::RateLimited { reset });
        }

        Err(ApiError::ApiResponse {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.endpoints.api_url, path);
        trace!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// One page of a list endpoint. Empty repositories answer `204 No Content`
    /// on the contributors endpoint and `409 Conflict` on the commits endpoint.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        page: u32,
        per_page: usize,
    ) -> Result<Vec<T>, ApiError> {
        let url = format!("{}{}", self.endpoints.api_url, path);
        let mut params = query.to_vec();
        params.push(("per_page", per_page.to_string()));
        params.push(("page", page.to_string()));
        trace!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;
        if matches!(response.status(), StatusCode::NO_CONTENT | StatusCode::CONFLICT) {
            debug!("{} answered {}, treating as empty", url, response.status());
            return Ok(Vec::new());
        }

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    fn paginate<'a, T: DeserializeOwned + 'a>(
        &'a self,
        path: String,
        query: Vec<(&'static str, String)>,
    ) -> impl Stream<Item = Result<T, ApiError>> + 'a {
        async_stream! {
            let mut page = 1u32;

            loop {
                match self.get_page::<T>(&path, &query, page, MAX_PAGE_SIZE).await {
                    Ok(items) => {
                        let full = items.len() >= MAX_PAGE_SIZE;
                        for item in items {
                            yield Ok(item);
                        }

                        if !full {
                            break;
                        }
                        page += 1;
                    }
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
            }
        }
    }

    async fn get_all<T: DeserializeOwned>(
        &self,
        path: String,
        query: Vec<(&'static str, String)>,
    ) -> Result<Vec<T>, ApiError> {
        self.paginate(path, query).try_collect().await
    }
}

impl ContributorSource for GitHubClient {
    async fn list_contributors(
        &self,
        repo: &RepositoryRef,
    ) -> Result<Vec<RepoContributor>, ApiError> {
        self.get_all(format!("/repos/{}/contributors", repo.full_name()), Vec::new())
            .await
    }

    async fn has_commits(
        &self,
        repo: &RepositoryRef,
        author: &str,
        window: &DateWindow,
    ) -> Result<bool, ApiError> {
        let query = [
            ("author", author.to_string()),
            ("since", window.since_timestamp()),
            ("until", window.until_timestamp()),
        ];
        let commits: Vec<ApiCommit> = self
            .get_page(&format!("/repos/{}/commits", repo.full_name()), &query, 1, 1)
            .await?;
        Ok(!commits.is_empty())
    }

    async fn list_commits(
        &self,
        repo: &RepositoryRef,
        window: Option<&DateWindow>,
    ) -> Result<Vec<CommitMessage>, ApiError> {
        let query = match window {
            Some(window) => vec![
                ("since", window.since_timestamp()),
                ("until", window.until_timestamp()),
            ],
            None => Vec::new(),
        };
        let commits: Vec<ApiCommit> = self
            .get_all(format!("/repos/{}/commits", repo.full_name()), query)
            .await?;

        Ok(commits
            .into_iter()
            .map(|c| CommitMessage {
                sha: c.sha,
                message: c.commit.message,
            })
            .collect())
    }

    async fn list_repositories(
        &self,
        organization: &str,
    ) -> Result<Vec<RepositoryRef>, ApiError> {
        let repos: Vec<ApiRepository> = self
            .get_all(format!("/orgs/{}/repos", organization), Vec::new())
            .await?;

        Ok(repos
            .into_iter()
            .map(|r| RepositoryRef::new(r.owner.login, r.name))
            .collect())
    }

    async fn get_repository(&self, owner: &str, name: &str) -> Result<RepositoryRef, ApiError> {
        let repo: ApiRepository = self
            .get_json(&format!("/repos/{}/{}", owner, name), &[])
            .await?;
        debug!("found repository {}", repo.full_name);
        Ok(RepositoryRef::new(repo.owner.login, repo.name))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        let query = [("q", format!("{} in:email", email))];
        let result: UserSearchResponse = self.get_json("/search/users", &query).await?;

        if result.total_count == 0 {
            return Ok(None);
        }
        Ok(result.items.into_iter().next().map(|u| u.login))
    }

    async fn list_user_organisations(&self, login: &str) -> Result<Vec<String>, ApiError> {
        let orgs: Vec<ApiOrganization> = self
            .get_all(format!("/users/{}/orgs", login), Vec::new())
            .await?;
        Ok(orgs.into_iter().map(|o| o.login).collect())
    }
}

impl SponsorLookup for GitHubClient {
    async fn has_sponsors_listing(&self, login: &str) -> Result<bool, ApiError> {
        let request = GraphQlRequest {
            query: SPONSOR_LISTING_QUERY,
            variables: serde_json::json!({ "username": login }),
        };

        let response = self
            .client
            .post(&self.endpoints.graphql_url)
            .json(&request)
            .send()
            .await?;

        let response = Self::check(response).await?;
        let body: GraphQlResponse<SponsorListingData> = response.json().await?;

        if !body.errors.is_empty() {
            return Err(ApiError::GraphQl(body.error_messages()));
        }

        let data = body
            .data
            .ok_or_else(|| ApiError::GraphQl("response has no data".to_string()))?;

        Ok(data
            .repository_owner
            .map(|owner| owner.has_sponsors_listing)
            .unwrap_or(false))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
