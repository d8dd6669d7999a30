//! Sequential upload/download benchmark driver.
//!
//! Both paths issue one request at a time, time it from issue until the
//! response body is fully consumed, and record the elapsed time into a
//! caller-owned [`LatencySamples`](crate::metrics::LatencySamples).
mod download;
mod endpoint;
mod manifest;
mod upload;


use std::path::Path;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError, RunError};

pub use download::{DownloadPlan, run_download};
pub use endpoint::Endpoint;
pub use manifest::{ManifestReader, ManifestWriter};
pub use upload::{UploadPlan, run_upload, synthetic_name};

/// Build the HTTP client shared by every request of a run.
///
/// No request timeout is configured; a stalled server stalls the run.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> AppResult<Client> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

pub(crate) async fn create_dir_if_missing(path: &Path) -> AppResult<()> {
    tokio::fs::create_dir_all(path).await.map_err(|err| {
        AppError::run(RunError::CreateDir {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

pub(crate) async fn remove_dir_if_present(path: &Path) -> AppResult<()> {
    match tokio::fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::run(RunError::RemoveScratch {
            path: path.to_path_buf(),
            source: err,
        })),
    }
}
