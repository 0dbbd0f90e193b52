use std::collections::HashMap;
use std::sync::Mutex;

/// Map contents and the version counter live under one lock so no reader can
/// observe a counter increment without its map mutation, or vice versa.
#[derive(Debug, Default)]
struct StoreInner {
    entries: HashMap<String, String>,
    version: u64,
}

/// The in-memory state of one node.
///
/// Created empty at process start and alive for the process lifetime; there
/// is no persistence, so a restart loses all entries and resets the version
/// to zero. The version counter is global to the store, not tied to any
/// individual key: the version reported alongside a read is the store-wide
/// version at the instant of that read.
#[derive(Debug, Default)]
pub struct KeyValueStore {
    inner: Mutex<StoreInner>,
}

impl KeyValueStore {
    pub fn new() -> Self {
        KeyValueStore {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Looks up a key, returning its value (or `None` for an absent key,
    /// which is a normal outcome rather than an error) together with the
    /// global version at the instant of the read.
    pub fn get(&self, key: &str) -> (Option<String>, u64) {
        let inner = self.inner.lock().unwrap();
        (inner.entries.get(key).cloned(), inner.version)
    }

    /// Writes a value, unconditionally overwriting any prior value for the
    /// key, and returns the post-increment global version. Never fails:
    /// empty keys and values are accepted as-is.
    pub fn put(&self, key: String, value: String) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.insert(key, value);
        inner.version += 1;
        inner.version
    }

    /// Returns a copy of every entry plus the global version at the instant
    /// of the snapshot. Later writes do not affect the returned map.
    pub fn dump_all(&self) -> (HashMap<String, String>, u64) {
        let inner = self.inner.lock().unwrap();
        (inner.entries.clone(), inner.version)
    }
}
