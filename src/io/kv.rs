use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Local string-keyed key-value storage backed by a single JSON object
/// file. Reads are tolerant: a missing or malformed file means "no saved
/// data". Writes go read-modify-write so independent stores can share one
/// file without clobbering each other's keys. Key order is preserved, so
/// repeated writes produce stable output.
#[derive(Debug, Clone)]
pub struct KvStore {
    path: PathBuf,
}

impl KvStore {
    /// Open a store at the given file path. No I/O happens until the first
    /// read or write; the file need not exist.
    pub fn open(path: impl Into<PathBuf>) -> KvStore {
        KvStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    /// Store `value` under `key`, creating the file (and parent directory)
    /// on first write.
    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, json)
    }

    fn read_map(&self) -> IndexMap<String, String> {
        let Ok(text) = fs::read_to_string(&self.path) else {
            return IndexMap::new();
        };
        match serde_json::from_str(&text) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("malformed storage file {}: {}", self.path.display(), e);
                IndexMap::new()
            }
        }
    }
}
