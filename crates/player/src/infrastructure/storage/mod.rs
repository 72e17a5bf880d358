//! Storage adapters for the durable and session scopes

mod file;
mod memory;

pub use file::FileStorageProvider;
pub use memory::MemoryStorageProvider;
