//! Key-value storage adapters.

pub mod atomic_json;
mod file;
mod memory;

pub use file::FileKeyValueStorage;
pub use memory::MemoryKeyValueStorage;
