//! Uniform stderr diagnostics.
//!
//! Warnings go through `tracing` when a subscriber is installed (`RUST_LOG` is
//! set), otherwise they are printed with a `WARN:` prefix.

const PREFIX: &str = "hub-deps";

/// Format a user-facing error message.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("{}: {}", PREFIX, msg.as_ref())
}

/// Report a non-fatal problem with the input.
pub fn warn(msg: impl AsRef<str>) {
    let msg = msg.as_ref();
    if tracing::dispatcher::has_been_set() {
        tracing::warn!("{}", msg);
    } else {
        eprintln!("WARN: {}", msg);
    }
}
