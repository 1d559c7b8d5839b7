//! Cross-frontend primitives for presenting the quiz.
//!
//! Houses message logging, event handling, and view-model types that both CLI
//! and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{EventConsumer, EventImpact, QuizEventConsumer};
pub use frontend::{Frontend, FrontendExit};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::QuizViewModel;
