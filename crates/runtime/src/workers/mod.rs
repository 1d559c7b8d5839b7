//! Worker tasks that back the runtime orchestration.
//!
//! The session worker serializes every quiz mutation and owns the requested
//! view; the animation task lives with the view that mounts it (see
//! [`crate::api::ViewAnimation`]).

mod session;

pub use session::{Command, SessionWorker};
