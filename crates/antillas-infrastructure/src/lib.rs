//! Storage, path and configuration adapters for `antillas-core`.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::AntillasPaths;
pub use crate::storage::{FileKeyValueStorage, MemoryKeyValueStorage};
