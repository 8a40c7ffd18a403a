//! Core types and traits for restdeck.
//!
//! This crate provides the record model, error handling, and the trait
//! definitions for the remote collection client and the notification sink
//! used across the restdeck workspace.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

/// Trait definition for the remote collection client.
pub mod client;
/// Error types and result definitions.
pub mod error;
/// Notice types and the notification sink trait.
pub mod notify;
/// Synchronization utilities.
pub mod sync;
/// Record and draft data types.
pub mod types;

pub use client::CollectionClient;
pub use error::{Error, Result};
pub use notify::{Notice, NotificationSink, Position, RecordingSink, Severity};
pub use sync::IgnoreLock;
pub use types::{JoinedRow, Post, PostDraft, User, UserDraft};
