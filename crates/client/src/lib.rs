//! Top-level client orchestrating the quiz Runtime and a Frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Quiz session worker and event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! - **Client**: Composition root, lifecycle management
//! - **Runtime**: Session state machine, held controls, event emission
//! - **Frontend**: User interaction, event consumption, rendering (via RuntimeHandle only)
//!
//! One `Client` runs one quiz session. The binary builds a new one each time
//! the player picks a mode on the home screen.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::{Frontend, FrontendExit};

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives an already running runtime and a frontend
/// 2. Client::run() transfers control to the frontend (blocking)
/// 3. On frontend exit, the runtime worker is shut down and joined
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the player leaves the session.
    ///
    /// The runtime is shut down even when the frontend fails; the frontend
    /// error takes precedence.
    pub async fn run(self) -> Result<FrontendExit> {
        let handle = self.runtime.handle();
        let mode = self.runtime.mode();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;
        drop(frontend);

        let shutdown_result = self.runtime.shutdown().await;
        tracing::info!(%mode, "quiz session closed");

        let exit = frontend_result?;
        shutdown_result?;
        Ok(exit)
    }
}
