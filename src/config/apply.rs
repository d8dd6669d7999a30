use std::path::PathBuf;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveU64, parse_file_size};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::{ConfigFile, FileSizeValue};

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

/// Applies configuration values to CLI arguments that were not set explicitly.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "host")
        && let Some(host) = config.host.as_deref()
    {
        let host = host.trim();
        if host.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyHost));
        }
        host.clone_into(&mut args.host);
    }

    if !is_cli(matches, "port")
        && let Some(port) = config.port
    {
        args.port = port;
    }

    if !is_cli(matches, "file_size")
        && let Some(size) = config.file_size.as_ref()
    {
        args.file_size = match size {
            FileSizeValue::Bytes(bytes) => *bytes,
            FileSizeValue::Text(text) => parse_file_size(text)?,
        };
    }

    if !is_cli(matches, "file_count")
        && let Some(count) = config.file_count
    {
        args.file_count = ensure_positive_u64(count, "file_count")?;
    }

    if !is_cli(matches, "manifest")
        && let Some(manifest) = config.manifest.as_ref()
    {
        args.manifest = PathBuf::from(manifest);
    }

    if !is_cli(matches, "scratch_dir")
        && let Some(dir) = config.scratch_dir.as_ref()
    {
        args.scratch_dir = PathBuf::from(dir);
    }

    if !is_cli(matches, "download_dir")
        && let Some(dir) = config.download_dir.as_ref()
    {
        args.download_dir = PathBuf::from(dir);
    }

    if !is_cli(matches, "alphabet")
        && let Some(alphabet) = config.alphabet.clone()
    {
        args.alphabet = Some(alphabet);
    }

    Ok(())
}
