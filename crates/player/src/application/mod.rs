//! Application layer: guide resolution use cases and their errors

pub mod error;
pub mod services;

pub use error::GuideError;
pub use services::GuideChainService;
