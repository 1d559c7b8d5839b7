//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the view model and renders to a
//! terminal frame. Widgets never talk to the runtime.

pub mod exhaustive;
pub mod footer;
pub mod globe;
pub mod header;
pub mod messages;
pub mod random;
