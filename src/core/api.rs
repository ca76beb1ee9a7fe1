pub mod client;
pub mod error;
pub mod types;

pub use client::{GitHubClient, GitHubEndpoints, API_BASE_URL, WEB_BASE_URL};
pub use error::ApiError;
pub use types::{
    ApiCommit, ApiCommitDetail, ApiOrganization, ApiOwner, ApiRepository, GraphQlError,
    GraphQlRequest, GraphQlResponse, SponsorListingData, SponsorListingOwner, UserSearchItem,
    UserSearchResponse,
};
