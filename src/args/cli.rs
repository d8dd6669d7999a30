use clap::Parser;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_DOWNLOAD_DIR, DEFAULT_FILE_SIZE, DEFAULT_HOST, DEFAULT_MANIFEST, DEFAULT_PORT,
    DEFAULT_SCRATCH_DIR,
};
use super::parsers::{parse_file_size, parse_host, parse_positive_u64};
use super::types::{Mode, PositiveU64};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Benchmark the upload and download paths of an HTTP file-storage service."
)]
pub struct BenchArgs {
    /// Operation to run: upload synthetic files or download the manifest's files
    #[arg(long = "command", short = 'c', value_enum, ignore_case = true)]
    pub mode: Mode,

    /// Size of each synthetic file (bytes, or with a K/M/G suffix)
    #[arg(
        long = "size",
        short = 's',
        default_value = DEFAULT_FILE_SIZE,
        value_parser = parse_file_size
    )]
    pub file_size: u64,

    /// Number of files to upload
    #[arg(
        long = "count",
        short = 'n',
        default_value = "1",
        value_parser = parse_positive_u64
    )]
    pub file_count: PositiveU64,

    /// Manifest file that stores the uploaded file names, one per line
    #[arg(long = "filenames", short = 'f', alias = "fn", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Storage server host
    #[arg(long = "host", default_value = DEFAULT_HOST, value_parser = parse_host)]
    pub host: String,

    /// Storage server port
    #[arg(long = "port", short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory for synthetic files (removed after a successful upload)
    #[arg(long = "scratch-dir", default_value = DEFAULT_SCRATCH_DIR)]
    pub scratch_dir: PathBuf,

    /// Directory downloaded files are written to
    #[arg(long = "download-dir", default_value = DEFAULT_DOWNLOAD_DIR)]
    pub download_dir: PathBuf,

    /// Symbols synthetic content is drawn from (2 to 256 bytes, defaults to A-Za-z0-9)
    #[arg(long = "alphabet")]
    pub alphabet: Option<String>,

    /// Path to config file (TOML/JSON). Defaults to ./httpfs-bench.toml or ./httpfs-bench.json if present.
    #[arg(long = "config")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by HTTPFS_BENCH_LOG/RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output (also honored via NO_COLOR)
    #[arg(long = "no-color")]
    pub no_color: bool,
}
