//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// How a frontend left its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontendExit {
    /// Back to mode selection; the caller may start another session.
    Home,
    /// Leave the application.
    Quit,
}

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the quiz via RuntimeHandle:
/// - Subscribe to events (Quiz, View)
/// - Submit guesses, pick options, press and release controls
/// - Mount the globe animation and query snapshots
///
/// Frontends do NOT own the Runtime - they receive a handle for communication only.
///
/// # Example Implementation
///
/// ```no_run
/// use async_trait::async_trait;
/// use client_frontend_core::{Frontend, FrontendExit};
/// use runtime::RuntimeHandle;
/// use anyhow::Result;
///
/// struct MyFrontend;
///
/// #[async_trait]
/// impl Frontend for MyFrontend {
///     async fn run(&mut self, handle: RuntimeHandle) -> Result<FrontendExit> {
///         let mut events = handle.subscribe(runtime::Topic::Quiz);
///
///         while let Ok(event) = events.recv().await {
///             // Render UI, handle input, etc.
///         }
///
///         Ok(FrontendExit::Quit)
///     }
/// }
/// ```
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop for one session.
    ///
    /// Should block until the player leaves the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<FrontendExit>;
}
