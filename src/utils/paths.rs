use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Maximum size for report.json and questions.jsonl: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Reject files over the size limit. Takes the open handle so the check and the read
/// see the same file.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, limit {} bytes)",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Expand a leading `~` to the home directory
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use halachabench_dashboard::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/data"), PathBuf::from("/srv/data"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_validate_file_size_small_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        let handle = File::open(file.path()).unwrap();
        assert!(validate_file_size(&handle, file.path()).is_ok());
    }

    #[test]
    fn test_validate_file_size_too_large() {
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();
        let handle = File::open(file.path()).unwrap();

        let err = validate_file_size(&handle, file.path()).unwrap_err();
        assert!(err.to_string().contains("File too large"));
    }

    #[test]
    fn test_expand_tilde_plain_paths_untouched() {
        assert_eq!(expand_tilde("data"), PathBuf::from("data"));
        assert_eq!(expand_tilde("~user/data"), PathBuf::from("~user/data"));
    }

    #[test]
    fn test_expand_tilde_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/bench/data"), home.join("bench/data"));
        }
    }
}
