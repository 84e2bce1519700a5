use std::path::PathBuf;

/// Resolve the data directory: an explicit override (the `-C` flag) wins,
/// otherwise the platform data directory plus `taskmaster`.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskmaster"),
    }
}

/// The key-value storage file inside a data directory.
pub fn storage_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("storage.json")
}
