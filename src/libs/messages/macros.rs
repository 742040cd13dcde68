//! Output macros for [`Message`](super::Message) values.
//!
//! Each macro checks once whether debug output is on and then either emits a
//! `tracing` event or prints to the console:
//!
//! ```text
//! msg_info!(msg) ──▶ TASKTIME_DEBUG or RUST_LOG set? ──▶ tracing::info!
//!                                   │
//!                                   └── otherwise ─────▶ println!
//! ```
//!
//! | Macro               | Prefix | Console stream |
//! |---------------------|--------|----------------|
//! | `msg_print!`        |        | stdout         |
//! | `msg_success!`      | ✅     | stdout         |
//! | `msg_info!`         | ℹ️     | stdout         |
//! | `msg_warning!`      | ⚠️     | stdout         |
//! | `msg_error!`        | ❌     | stderr         |
//! | `msg_debug!`        | 🔍     | (debug only)   |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` turn a message into an
//! `anyhow::Error` for propagation with `?`; `main` prints it with `msg_error!`.
//!
//! ```rust
//! use tasktime::libs::messages::Message;
//! use tasktime::{msg_error_anyhow, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! let error = msg_error_anyhow!(Message::ExportEmptyLog);
//! assert!(error.to_string().contains("empty"));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages go to `tracing` instead of the console.
///
/// Enabled when `TASKTIME_DEBUG` or `RUST_LOG` is set. Checked once per
/// process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKTIME_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message with no prefix. Pass `true` as a second argument to
/// surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Errors go to stderr in console mode so they stay out of piped output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Only emitted in debug mode; silent otherwise.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
