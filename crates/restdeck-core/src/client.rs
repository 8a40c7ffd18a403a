use async_trait::async_trait;

use crate::types::{Post, PostDraft, User, UserDraft};
use crate::Result;

/// Trait for clients of a remote record collection API.
///
/// Implementations follow plain REST semantics per collection: list the whole
/// collection in one response, create, partially update by id, delete by id.
/// No retry, backoff, or timeout policy is layered on top; failures surface
/// as typed errors for the caller to log and display.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Fetches the full users collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a user from a draft and returns the server echo.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn create_user(&self, draft: &UserDraft) -> Result<User>;

    /// Partially updates the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User>;

    /// Deletes the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn delete_user(&self, id: i64) -> Result<()>;

    /// Fetches the full posts collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Creates a post. The caller supplies the complete record, locally
    /// assigned id included; the server echo is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn create_post(&self, post: &Post) -> Result<Post>;

    /// Partially updates the post with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post>;

    /// Deletes the post with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn delete_post(&self, id: i64) -> Result<()>;
}
