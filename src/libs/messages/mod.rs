//! User-facing text.
//!
//! All output shown to the user is a [`Message`] variant rendered through its
//! `Display` impl (`display.rs`) and printed with the `msg_*` macros
//! (`macros.rs`), which route to `tracing` when debug output is enabled.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
