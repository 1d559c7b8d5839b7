//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, dataset resolution, and runtime setup that
//! can be reused by CLI, UI, or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{BootstrapConfig, ChannelConfig};
