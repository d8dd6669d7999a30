use std::path::{Path, PathBuf};

use rand::{CryptoRng, RngCore};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tokio::time::Instant;
use tracing::{debug, info};
use url::Url;

use crate::content::ContentGenerator;
use crate::error::{AppError, AppResult, HttpError, RunError, ValidationError};
use crate::metrics::LatencySamples;

use super::manifest::ManifestWriter;
use super::{Endpoint, create_dir_if_missing, remove_dir_if_present};

/// Multipart field the storage service reads uploads from.
const FORM_FIELD: &str = "files";
const PART_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct UploadPlan {
    pub file_size: u64,
    pub file_count: u64,
    pub manifest: PathBuf,
    pub scratch_dir: PathBuf,
}

/// Name of the `index`-th synthetic file of a run.
#[must_use]
pub fn synthetic_name(file_size: u64, index: u64) -> String {
    format!("{}-{}", file_size, index)
}

/// Generate, upload, and record `plan.file_count` files, one at a time.
///
/// Each iteration writes a scratch file, times the multipart `POST`, and
/// appends the name to the manifest. The scratch directory is removed once
/// every file has been uploaded.
///
/// # Errors
///
/// Returns the first failure: content generation, scratch or manifest I/O,
/// transport errors, or a non-2xx response. Samples recorded before the
/// failure stay in `samples`; there is exactly one per manifest entry.
pub async fn run_upload<R>(
    client: &Client,
    endpoint: &Endpoint,
    plan: &UploadPlan,
    generator: &mut ContentGenerator<R>,
    samples: &mut LatencySamples,
) -> AppResult<()>
where
    R: RngCore + CryptoRng,
{
    let length = usize::try_from(plan.file_size).map_err(|_err| {
        AppError::validation(ValidationError::InvalidFileSize {
            value: plan.file_size.to_string(),
        })
    })?;
    create_dir_if_missing(&plan.scratch_dir).await?;
    let mut manifest = ManifestWriter::create(&plan.manifest).await?;
    let upload_url = endpoint.upload_url();

    info!(
        "Uploading {} files of {} B to {}",
        plan.file_count, plan.file_size, upload_url
    );

    for index in 0..plan.file_count {
        let name = synthetic_name(plan.file_size, index);
        let path = plan.scratch_dir.join(&name);

        let content = generator.generate(length)?;
        tokio::fs::write(&path, content).await.map_err(|err| {
            AppError::run(RunError::WriteScratch {
                path: path.clone(),
                source: err,
            })
        })?;

        let start = Instant::now();
        upload_file(client, &upload_url, &name, &path).await?;
        let elapsed = start.elapsed();

        // A file counts as uploaded once its name is in the manifest.
        manifest.append(&name).await?;
        samples.record(elapsed);
        debug!(file = %name, elapsed_us = elapsed.as_micros(), "uploaded");
    }

    remove_dir_if_present(&plan.scratch_dir).await?;
    Ok(())
}

async fn upload_file(client: &Client, url: &Url, name: &str, path: &Path) -> AppResult<()> {
    let bytes = tokio::fs::read(path).await.map_err(|err| {
        AppError::run(RunError::ReadScratch {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let part = Part::bytes(bytes)
        .file_name(name.to_owned())
        .mime_str(PART_MIME)
        .map_err(|err| upload_failed(name, err))?;
    let form = Form::new().part(FORM_FIELD, part);

    let response = client
        .post(url.clone())
        .multipart(form)
        .send()
        .await
        .map_err(|err| upload_failed(name, err))?;
    let status = response.status();
    // Drain the body so the request is complete before the timer stops.
    response.bytes().await.map_err(|err| {
        AppError::http(HttpError::ReadBody {
            name: name.to_owned(),
            source: err,
        })
    })?;

    if !status.is_success() {
        return Err(AppError::http(HttpError::UnexpectedStatus {
            name: name.to_owned(),
            status,
        }));
    }
    Ok(())
}

fn upload_failed(name: &str, source: reqwest::Error) -> AppError {
    AppError::http(HttpError::UploadFailed {
        name: name.to_owned(),
        source,
    })
}
