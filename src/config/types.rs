use serde::Deserialize;

/// Settings accepted from `httpfs-bench.toml` / `httpfs-bench.json`.
///
/// Every field is optional; values given on the command line win.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub file_size: Option<FileSizeValue>,
    pub file_count: Option<u64>,
    #[serde(alias = "filenames")]
    pub manifest: Option<String>,
    pub scratch_dir: Option<String>,
    pub download_dir: Option<String>,
    pub alphabet: Option<String>,
}

/// A byte count given either as a number or as a string with a unit suffix.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FileSizeValue {
    Bytes(u64),
    Text(String),
}
