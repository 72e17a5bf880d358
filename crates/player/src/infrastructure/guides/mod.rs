//! Guide document source adapters

mod fs;

pub use fs::FsGuideSource;
