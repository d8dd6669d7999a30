use std::path::PathBuf;

use thiserror::Error;

/// Local filesystem failures during a benchmark run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to remove scratch directory '{path}': {source}")]
    RemoveScratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write temporary file '{path}': {source}")]
    WriteScratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read temporary file '{path}': {source}")]
    ReadScratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open manifest '{path}': {source}")]
    OpenManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to store file name in manifest '{path}': {source}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read manifest '{path}': {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to create local file '{path}': {source}")]
    CreateLocal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy response to local file '{path}': {source}")]
    WriteLocal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
