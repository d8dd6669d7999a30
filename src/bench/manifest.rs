use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};

use crate::error::{AppError, AppResult, RunError, ValidationError};

/// Appends uploaded file names, one per line, flushing after each entry so
/// an aborted run leaves exactly the names that were uploaded.
#[derive(Debug)]
pub struct ManifestWriter {
    path: PathBuf,
    file: File,
}

impl ManifestWriter {
    /// Create (or truncate) the manifest at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub async fn create(path: &Path) -> AppResult<Self> {
        let file = File::create(path).await.map_err(|err| {
            AppError::run(RunError::OpenManifest {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Append `name` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be written or flushed.
    pub async fn append(&mut self, name: &str) -> AppResult<()> {
        let mut line = String::with_capacity(name.len().saturating_add(1));
        line.push_str(name);
        line.push('\n');
        self.file.write_all(line.as_bytes()).await.map_err(|err| {
            AppError::run(RunError::WriteManifest {
                path: self.path.clone(),
                source: err,
            })
        })?;
        self.file.flush().await.map_err(|err| {
            AppError::run(RunError::WriteManifest {
                path: self.path.clone(),
                source: err,
            })
        })
    }
}

/// Reads manifest entries one line at a time.
#[derive(Debug)]
pub struct ManifestReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: u64,
}

impl ManifestReader {
    /// Open the manifest at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub async fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).await.map_err(|err| {
            AppError::run(RunError::OpenManifest {
                path: path.to_path_buf(),
                source: err,
            })
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }

    /// Next file name, or `None` at end of input.
    ///
    /// Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error on read failures or when an entry could escape the
    /// download directory.
    pub async fn next_entry(&mut self) -> AppResult<Option<String>> {
        loop {
            let line = self.lines.next_line().await.map_err(|err| {
                AppError::run(RunError::ReadManifest {
                    path: self.path.clone(),
                    source: err,
                })
            })?;
            let Some(line) = line else {
                return Ok(None);
            };
            self.line_no = self.line_no.saturating_add(1);
            if line.trim().is_empty() {
                continue;
            }
            validate_entry(self.line_no, &line)?;
            return Ok(Some(line));
        }
    }
}

/// Entries become local file names, so they must stay a single path component.
pub(crate) fn validate_entry(line_no: u64, name: &str) -> Result<(), ValidationError> {
    let escapes = name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
        || Path::new(name).is_absolute();
    if escapes {
        return Err(ValidationError::InvalidManifestEntry {
            line: line_no,
            name: name.to_owned(),
        });
    }
    Ok(())
}
