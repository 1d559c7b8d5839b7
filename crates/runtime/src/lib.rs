//! Runtime orchestration for the geography quiz.
//!
//! This crate wires the quiz state machine and the orientation animator into
//! background tasks behind a cohesive async API. Consumers embed [`Runtime`]
//! to start a session, subscribe to events, and steer the globe through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, ViewAnimation, ViewFrame};
pub use events::{Event, EventBus, QuizEvent, RetargetCause, Topic, ViewEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
