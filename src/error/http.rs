use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid endpoint '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Endpoint '{url}' cannot carry a file path.")]
    EndpointNotABase { url: String },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Upload of '{name}' failed: {source}")]
    UploadFailed {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Download of '{name}' failed: {source}")]
    DownloadFailed {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body for '{name}': {source}")]
    ReadBody {
        name: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Server answered {status} for '{name}'.")]
    UnexpectedStatus { name: String, status: StatusCode },
}
