//! Remote collection client implementations for restdeck.
//!
//! [`HttpCollectionClient`] talks to a JSONPlaceholder-style REST API over
//! reqwest; [`MockCollectionClient`] is an in-memory stand-in used by tests
//! across the workspace.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

/// HTTP client for the remote collection API.
pub mod http;
/// In-memory mock client for tests.
pub mod mock;

pub use http::{DEFAULT_BASE_URL, HttpCollectionClient};
pub use mock::MockCollectionClient;
