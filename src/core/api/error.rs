use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {status} - {message}")]
    ApiResponse { status: u16, message: String },

    #[error("Authentication failed. Check that GH_TOKEN is valid.")]
    Unauthorized,

    #[error("Rate limit exceeded (resets at {reset})")]
    RateLimited { reset: String },

    #[error("GraphQL query failed: {0}")]
    GraphQl(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}
