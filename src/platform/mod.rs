//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging setup
//! - Default save storage (LocalStorage on web, a directory natively)

use crate::persistence::SaveStore;

/// Install the logger for this platform; safe to call more than once
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Install the logger for this platform; safe to call more than once
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Directory used for native saves (`$STACK_HUB_DATA` or `./saves`)
#[cfg(not(target_arch = "wasm32"))]
pub fn default_save_dir() -> std::path::PathBuf {
    std::env::var_os("STACK_HUB_DATA")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from("saves"))
}

/// Open the platform's save store, falling back to memory if storage is unusable
#[cfg(not(target_arch = "wasm32"))]
pub fn open_save_store() -> SaveStore {
    use crate::persistence::{FileBackend, MemoryBackend};

    let dir = default_save_dir();
    match FileBackend::open(&dir) {
        Ok(backend) => {
            log::info!("Saving to {}", dir.display());
            SaveStore::open(backend)
        }
        Err(e) => {
            log::warn!("Cannot use {} for saves, keeping them in memory: {e}", dir.display());
            SaveStore::open(MemoryBackend::new())
        }
    }
}

/// Open the platform's save store
#[cfg(target_arch = "wasm32")]
pub fn open_save_store() -> SaveStore {
    SaveStore::open(crate::persistence::LocalStorageBackend)
}
