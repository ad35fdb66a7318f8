//! Convenient macros for application messaging and logging.
//!
//! Provides the macros used throughout the application to display messages to
//! the user. The macros automatically pick one of two output modes so a single
//! call site serves both interactive use and debugging sessions.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is considered enabled when either environment variable is set:
//! - **`STUDYMATE_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! Detection happens once and is cached in a `OnceLock` for the lifetime of
//! the process.
//!
//! ## Output Routing
//!
//! - **Debug Mode**: Messages are emitted as `tracing` events so they carry
//!   timestamps and levels and interleave correctly with other spans
//! - **Normal Mode**: Messages go straight to stdout/stderr via `println!` and
//!   `eprintln!`
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: General message display
//! - **`msg_success!`**: Success notifications with ✅ prefix
//! - **`msg_info!`**: Informational messages with ℹ️ prefix
//! - **`msg_warning!`**: Warning messages with ⚠️ prefix
//! - **`msg_error!`**: Error messages with ❌ prefix (stderr in normal mode)
//! - **`msg_debug!`**: Debug-only messages with 🔍 prefix
//! - **`msg_error_anyhow!`**: Create an `anyhow::Error` from a message
//! - **`msg_bail_anyhow!`**: Early return with an error built from a message
//!
//! ## Usage Examples
//!
//! ```rust
//! use studymate::{msg_success, msg_warning};
//! use studymate::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_warning!(Message::StoredTasksUnreadable);
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
///
/// Environment variables are checked on first access only; subsequent calls
/// are plain memory reads.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks whether debug mode is enabled, caching the result.
///
/// Debug mode is on when `STUDYMATE_DEBUG` or `RUST_LOG` is set. All message
/// macros consult this to decide between tracing events and plain console
/// output.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific debug flag or standard Rust logging config
        std::env::var("STUDYMATE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// The optional second argument `true` wraps the message in blank lines, which
/// is used for section headers.
///
/// ```rust
/// use studymate::libs::messages::Message;
/// use studymate::msg_print;
///
/// msg_print!(Message::TasksHeader);
/// msg_print!(Message::ProgressHeader, true);
/// ```
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

/// Prints a success message with ✅ prefix and automatic routing.
///
/// ```rust
/// use studymate::libs::messages::Message;
/// use studymate::msg_success;
///
/// msg_success!(Message::TaskScheduled("Read Ch.3".to_string()));
/// ```
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

/// Prints an error message with ❌ prefix.
///
/// Errors go to stderr in normal mode so scripts can separate them from data
/// output; in debug mode they become `tracing::error!` events.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Used for recoverable situations the user should know about, such as
/// unreadable stored state that was replaced with defaults.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
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

/// Debug-only message display with 🔍 prefix.
///
/// Completely silent unless debug mode is enabled.
///
/// ```rust
/// use studymate::msg_debug;
///
/// let pending = 3;
/// msg_debug!(format!("flushing {} tasks", pending));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// For error propagation in functions returning `anyhow::Result`.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
