pub mod adapter;
pub mod files;
pub mod kv_store;
pub mod settings;

pub use adapter::StoreAdapter;
pub use files::{
    config_file, ensure_data_dir, get_data_dir, init_local_data_dir, log_dir, storage_file,
};
pub use kv_store::{FileKvStore, KeyValueStore, StoreError};
#[cfg(test)]
pub use kv_store::MemoryKvStore;
pub use settings::{load_settings, Settings};
