//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::BenchArgs;
pub use types::{Mode, PositiveU64};

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub use defaults::{
    DEFAULT_DOWNLOAD_DIR, DEFAULT_HOST, DEFAULT_MANIFEST, DEFAULT_PORT, DEFAULT_SCRATCH_DIR,
};
pub(crate) use parsers::parse_file_size;
