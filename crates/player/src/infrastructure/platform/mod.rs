//! Platform-specific implementations
//!
//! Builds a [`crate::state::Platform`] from concrete adapters.

mod desktop;

pub use desktop::create_platform;
