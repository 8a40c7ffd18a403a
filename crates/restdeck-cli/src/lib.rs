//! Terminal client for a demo REST collection API.
//!
//! Library side of the `restdeck` binary: argument parsing, configuration,
//! logging setup, and the TUI shell. Exposed as a library so integration
//! tests can drive the app with injected input events.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

/// Command-line arguments.
pub mod cli;
/// Configuration file handling.
pub mod config;
/// Logging setup and TUI startup/teardown.
pub mod handlers;
/// The TUI subsystem.
pub mod ui;
