use super::types::PositiveU64;
use crate::error::{AppError, AppResult, ValidationError};

/// Bytes per KiB.
const KIB: u64 = 1_024;
/// Bytes per MiB.
const MIB: u64 = 1_024 * 1_024;
/// Bytes per GiB.
const GIB: u64 = 1_024 * 1_024 * 1_024;

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

/// Parse a byte count such as `1024`, `256K`, `4MiB` or `1g`.
pub(crate) fn parse_file_size(s: &str) -> AppResult<u64> {
    let invalid = || {
        AppError::validation(ValidationError::InvalidFileSize {
            value: s.to_owned(),
        })
    };
    let trimmed = s.trim();
    let split = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(invalid());
    }
    let value: u64 = digits
        .parse()
        .map_err(|err| AppError::validation(ValidationError::InvalidNumber { source: err }))?;
    let multiplier = match suffix.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => KIB,
        "m" | "mb" | "mib" => MIB,
        "g" | "gb" | "gib" => GIB,
        _ => return Err(invalid()),
    };
    value.checked_mul(multiplier).ok_or_else(invalid)
}

pub(super) fn parse_host(s: &str) -> AppResult<String> {
    let host = s.trim();
    if host.is_empty() {
        return Err(AppError::validation(ValidationError::EmptyHost));
    }
    Ok(host.to_owned())
}
