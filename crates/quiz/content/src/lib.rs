//! Data-driven quiz content and loaders.
//!
//! This crate reads the external files a quiz session is built from:
//! - The world topology (TopoJSON via `serde_json`)
//! - Quiz tuning (`config.toml` via `toml`)
//!
//! Everything it produces is a `quiz-core` type. Loading validates the
//! dataset once, so sessions never start on corrupt geometry.

pub mod error;
pub mod loaders;

pub use error::ContentError;
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TopologyLoader};
