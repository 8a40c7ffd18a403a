//! Editable list view-models for restdeck.
//!
//! Each collection screen owns one view-model: an in-memory copy of the
//! fetched collection(s), a derived filtered view, transient edit drafts,
//! and mutation operations that update local state only after the remote
//! call succeeds.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

/// Local id generation for newly created records.
pub mod ids;
/// Collection load states.
pub mod load;
/// Posts view-model: two joined collections.
pub mod posts;
/// Users view-model: a single collection.
pub mod users;

pub use ids::next_id;
pub use load::LoadState;
pub use posts::{PostField, PostInput, PostsPage};
pub use users::{UserField, UsersPage};

/// Warning shown when a creation form is submitted with blank fields.
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields!";
