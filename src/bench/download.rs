use std::path::PathBuf;

use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{AppError, AppResult, HttpError, RunError};
use crate::metrics::LatencySamples;

use super::manifest::ManifestReader;
use super::{Endpoint, create_dir_if_missing};

#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub manifest: PathBuf,
    pub download_dir: PathBuf,
}

/// Fetch every file named in the manifest into `plan.download_dir`.
///
/// Runs until the manifest is exhausted. Each sample covers the `GET` from
/// issue until the body has been written to the local file.
///
/// # Errors
///
/// Returns the first failure: manifest I/O or validation, transport errors,
/// a non-2xx response, or local file I/O. Samples recorded before the
/// failure stay in `samples`.
pub async fn run_download(
    client: &Client,
    endpoint: &Endpoint,
    plan: &DownloadPlan,
    samples: &mut LatencySamples,
) -> AppResult<()> {
    let mut manifest = ManifestReader::open(&plan.manifest).await?;
    create_dir_if_missing(&plan.download_dir).await?;

    info!(
        "Downloading files listed in {} from {}",
        plan.manifest.display(),
        endpoint.base()
    );

    while let Some(name) = manifest.next_entry().await? {
        let url = endpoint.file_url(&name)?;

        let start = Instant::now();
        let mut response = client.get(url).send().await.map_err(|err| {
            AppError::http(HttpError::DownloadFailed {
                name: name.clone(),
                source: err,
            })
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http(HttpError::UnexpectedStatus { name, status }));
        }

        let path = plan.download_dir.join(&name);
        let mut file = tokio::fs::File::create(&path).await.map_err(|err| {
            AppError::run(RunError::CreateLocal {
                path: path.clone(),
                source: err,
            })
        })?;
        let write_failed = |err: std::io::Error| {
            AppError::run(RunError::WriteLocal {
                path: path.clone(),
                source: err,
            })
        };
        while let Some(chunk) = response.chunk().await.map_err(|err| {
            AppError::http(HttpError::ReadBody {
                name: name.clone(),
                source: err,
            })
        })? {
            file.write_all(&chunk).await.map_err(write_failed)?;
        }
        file.flush().await.map_err(write_failed)?;

        let elapsed = start.elapsed();
        samples.record(elapsed);
        debug!(file = %name, elapsed_us = elapsed.as_micros(), "downloaded");
    }

    Ok(())
}
