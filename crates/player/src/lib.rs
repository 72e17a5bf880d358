//! Levelguide player: guide chain resolution, character saves and progress
//! tracking, plus the adapters and command-line front end that drive them.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
