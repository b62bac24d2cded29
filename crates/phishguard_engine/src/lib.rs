//! PhishGuard engine: classification client, scan runner and history persistence.
mod animation;
mod classify;
mod engine;
mod history;
mod persist;
mod scan;
mod types;

pub use animation::{ProgressAnimation, DEFAULT_STEP_DELAY};
pub use classify::{decode_prediction, Classifier, ClassifierSettings, ReqwestClassifier};
pub use engine::EngineHandle;
pub use history::{
    decode_history, local_time_clock, Clock, FileStorage, HistoryStore, MemoryStorage, Storage,
    StorageError, HISTORY_KEY,
};
pub use persist::{ensure_storage_dir, write_atomically, PersistError};
pub use scan::run_scan;
pub use types::{ChannelEventSink, EngineEvent, EventSink, ScanError};
