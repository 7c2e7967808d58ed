//! Save/load persistence
//!
//! Features:
//! - Single JSON blob under a fixed namespace key
//! - Parallel key/value lists on disk, lookup tables in memory
//! - Pluggable backends (memory, directory of files, LocalStorage on web)
//! - Corrupt or missing blobs load as empty data

pub mod backend;
pub mod save_data;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorageBackend;
pub use backend::{FileBackend, MemoryBackend, PreferenceBackend, StorageError};
pub use save_data::{SaveBlob, SaveData};
pub use store::SaveStore;
