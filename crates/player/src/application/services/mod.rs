//! Application services

mod guide_chain_service;

pub use guide_chain_service::GuideChainService;
