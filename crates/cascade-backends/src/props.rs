//! Properties-file store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use cascade_store::{KeyIter, Store, StoreResult};

/// File-backed store in java-properties style.
///
/// The file is parsed once at construction into an in-memory map; reads
/// and writes then behave like [`MapStore`](cascade_store::MapStore).
/// Nothing is written back until [`save`](PropertiesStore::save) is
/// called, which rewrites the file with keys sorted.
///
/// Parsing rules: lines are trimmed; blank lines and lines starting with
/// `#` or `!` are skipped; key and value split at the first `=` or `:`,
/// both halves trimmed; a line with no separator is a key with an empty
/// value. Escape sequences and line continuations are not interpreted.
pub struct PropertiesStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl PropertiesStore {
    /// Load the properties file at `path`, or start empty if it does not
    /// exist yet. Other I/O failures propagate.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => parse(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "loaded properties file"
        );
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Write the current entries back to the backing file, keys sorted.
    pub fn save(&self) -> StoreResult<()> {
        let entries = self.entries.read().expect("lock poisoned");
        let mut keys: Vec<&String> = entries.keys().collect();
        keys.sort();
        let mut out = String::new();
        for key in keys {
            out.push_str(key);
            out.push('=');
            out.push_str(&entries[key]);
            out.push('\n');
        }
        fs::write(&self.path, out)?;
        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "saved properties file"
        );
        Ok(())
    }
}

fn parse(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        match line.find(['=', ':']) {
            Some(pos) => {
                let key = line[..pos].trim();
                let value = line[pos + 1..].trim();
                if !key.is_empty() {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
            None => {
                entries.insert(line.to_string(), String::new());
            }
        }
    }
    entries
}

impl Store for PropertiesStore {
    fn exists(&self, key: &str) -> bool {
        self.entries.read().expect("lock poisoned").contains_key(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().expect("lock poisoned").get(key).cloned()
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value.to_string());
            }
            None => {
                entries.remove(key);
            }
        }
        Ok(())
    }

    fn keys(&self) -> KeyIter<'_> {
        let keys: Vec<String> = self
            .entries
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect();
        Box::new(keys.into_iter())
    }

    fn clear(&self) -> StoreResult<()> {
        self.entries.write().expect("lock poisoned").clear();
        Ok(())
    }

    fn is_immutable(&self) -> bool {
        false
    }

    fn describe(&self, out: &mut String) {
        out.push_str("props:");
        out.push_str(&self.path.display().to_string());
    }
}

impl std::fmt::Debug for PropertiesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertiesStore")
            .field("path", &self.path)
            .field("entry_count", &self.len())
            .finish()
    }
}
