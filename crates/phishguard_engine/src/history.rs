use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use phishguard_core::{prepend_bounded, HistoryEntry, HISTORY_LIMIT};
use scan_logging::{scan_debug, scan_error, scan_info, scan_warn};
use thiserror::Error;

use crate::persist::write_atomically;
use crate::PersistError;

/// Fixed slot under which the scan history is stored.
pub const HISTORY_KEY: &str = "phishguard.history";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Durable key-value slot, the local equivalent of browser storage.
pub trait Storage: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(file_name(key))
    }
}

fn file_name(key: &str) -> String {
    format!("{key}.json")
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write_atomically(&self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

/// Produces the display time stamped on new entries.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

/// Local wall-clock time as `HH:MM`.
pub fn local_time_clock() -> Clock {
    Arc::new(|| chrono::Local::now().format("%H:%M").to_string())
}

/// Tolerant decode policy for the persisted list.
///
/// Absent or corrupt data yields an empty history; this never fails.
pub fn decode_history(raw: Option<&str>) -> Vec<HistoryEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<HistoryEntry>>(raw) {
        Ok(mut entries) => {
            entries.truncate(HISTORY_LIMIT);
            entries
        }
        Err(err) => {
            scan_warn!("Discarding unreadable scan history: {}", err);
            Vec::new()
        }
    }
}

/// Bounded, most-recent-first scan history over a [`Storage`] slot.
///
/// Storage failures are logged and swallowed; callers always get a list back.
pub struct HistoryStore {
    storage: Arc<dyn Storage>,
    clock: Clock,
}

impl HistoryStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_clock(storage, local_time_clock())
    }

    pub fn with_clock(storage: Arc<dyn Storage>, clock: Clock) -> Self {
        Self { storage, clock }
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        match self.storage.load(HISTORY_KEY) {
            Ok(raw) => decode_history(raw.as_deref()),
            Err(err) => {
                scan_warn!("Failed to read scan history: {}", err);
                Vec::new()
            }
        }
    }

    /// Prepends a new entry stamped with the current time and returns the updated list.
    pub fn record(&self, url: &str, result: &str, probability: f64) -> Vec<HistoryEntry> {
        let mut history = self.entries();
        prepend_bounded(
            &mut history,
            HistoryEntry {
                url: url.to_string(),
                result: result.to_string(),
                probability,
                time: (self.clock)(),
            },
        );

        match serde_json::to_string(&history) {
            Ok(encoded) => {
                if let Err(err) = self.storage.save(HISTORY_KEY, &encoded) {
                    scan_error!("Failed to persist scan history: {}", err);
                } else {
                    scan_debug!("Recorded {} in history ({} entries)", url, history.len());
                }
            }
            Err(err) => scan_error!("Failed to encode scan history: {}", err),
        }
        history
    }

    pub fn clear(&self) {
        match self.storage.remove(HISTORY_KEY) {
            Ok(()) => scan_info!("Scan history cleared"),
            Err(err) => scan_error!("Failed to clear scan history: {}", err),
        }
    }
}
