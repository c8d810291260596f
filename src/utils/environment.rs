use std::env;
use std::path::PathBuf;

use super::paths::expand_tilde;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "HALACHABENCH_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Resolve the data directory: explicit flag, then `HALACHABENCH_DATA_DIR`, then `./data`
pub fn get_data_dir(flag: Option<&str>) -> PathBuf {
    let from_env = env::var(DATA_DIR_ENV).ok().filter(|value| !value.trim().is_empty());
    let raw = flag.map(str::to_string).or(from_env).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
    expand_tilde(&raw)
}
