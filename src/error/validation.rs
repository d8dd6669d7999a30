use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid file size '{value}'. Expected bytes with an optional K/M/G suffix.")]
    InvalidFileSize { value: String },
    #[error("Host must not be empty.")]
    EmptyHost,
    #[error("Manifest line {line} holds an invalid file name '{name}'.")]
    InvalidManifestEntry { line: u64, name: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
