//! Terminal UI frontend for the geography quiz.
//!
//! This crate provides a terminal-based user interface for the quiz.
//! It implements the `client_frontend_core::Frontend` trait for pure UI
//! rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Subscribes to events, mounts the globe animation, and submits guesses
//!   via the handle
//!
//! The mode is chosen on the [`home`] screen before a runtime exists, so the
//! terminal itself is entered once by the binary through [`terminal::enter`].

mod app;
mod config;
mod event_loop;
pub mod home;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use presentation::terminal;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
