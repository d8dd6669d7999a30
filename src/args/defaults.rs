pub(crate) const DEFAULT_USER_AGENT: &str = concat!("httpfs-bench/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_HOST: &str = "127.0.0.1";
/// The storage service listens on a fixed port unless overridden.
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MANIFEST: &str = "filenames";
pub const DEFAULT_SCRATCH_DIR: &str = "temp";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloaded";
/// 256 KiB, matching the service's default chunk size.
pub(crate) const DEFAULT_FILE_SIZE: &str = "256K";
