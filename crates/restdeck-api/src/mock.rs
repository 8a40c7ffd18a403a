//! Mock collection client for testing view-model behavior.
//!
//! Holds canned collections in memory, records every call, and can be told
//! to fail specific operations, enabling tests that pin down exactly which
//! requests were issued and how callers react to failures.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use restdeck_core::{
    CollectionClient, Error, IgnoreLock as _, Post, PostDraft, Result, User, UserDraft,
};

/// Shared interior state type.
type Shared<T> = Arc<Mutex<T>>;

/// Mock client over in-memory collections.
///
/// Cloning yields a handle onto the same state, so a test can keep one copy
/// and hand another to the code under test.
#[derive(Clone, Default)]
pub struct MockCollectionClient {
    /// Canned users collection.
    users: Shared<Vec<User>>,
    /// Canned posts collection.
    posts: Shared<Vec<Post>>,
    /// Operation names that should fail with an injected error.
    failing: Shared<HashSet<String>>,
    /// Names of every operation invoked, in order.
    call_history: Shared<Vec<String>>,
}

impl MockCollectionClient {
    /// Creates an empty mock client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the users collection.
    #[must_use]
    pub fn with_users(self, users: Vec<User>) -> Self {
        {
            let mut stored = self.users.lock_ignore_poison();
            *stored = users;
        }
        self
    }

    /// Seeds the posts collection.
    #[must_use]
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        {
            let mut stored = self.posts.lock_ignore_poison();
            *stored = posts;
        }
        self
    }

    /// Makes the named operation (e.g. `"update_user"`) fail.
    #[must_use]
    pub fn with_failure(self, operation: impl Into<String>) -> Self {
        {
            let mut failing = self.failing.lock_ignore_poison();
            failing.insert(operation.into());
        }
        self
    }

    /// Returns the names of all operations invoked so far, in order.
    #[must_use]
    pub fn call_history(&self) -> Vec<String> {
        let history = self.call_history.lock_ignore_poison();
        history.clone()
    }

    /// Returns the number of operations invoked so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        let history = self.call_history.lock_ignore_poison();
        history.len()
    }

    /// Clears the call history.
    pub fn clear_history(&self) {
        let mut history = self.call_history.lock_ignore_poison();
        history.clear();
    }

    /// Snapshot of the stored users collection.
    #[must_use]
    pub fn stored_users(&self) -> Vec<User> {
        let stored = self.users.lock_ignore_poison();
        stored.clone()
    }

    /// Snapshot of the stored posts collection.
    #[must_use]
    pub fn stored_posts(&self) -> Vec<Post> {
        let stored = self.posts.lock_ignore_poison();
        stored.clone()
    }

    /// Records the call and fails it if the operation was marked failing.
    fn record(&self, operation: &str) -> Result<()> {
        {
            let mut history = self.call_history.lock_ignore_poison();
            history.push(operation.to_owned());
        }
        let failing = self.failing.lock_ignore_poison();
        if failing.contains(operation) {
            return Err(Error::Api {
                status: 500,
                message: format!("injected failure for {operation}"),
            });
        }
        Ok(())
    }

    /// Next id the fake server would assign.
    fn next_user_id(&self) -> i64 {
        let stored = self.users.lock_ignore_poison();
        stored.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl CollectionClient for MockCollectionClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.record("list_users")?;
        Ok(self.stored_users())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        self.record("create_user")?;
        let user = draft.clone().into_user(self.next_user_id());
        let mut stored = self.users.lock_ignore_poison();
        stored.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User> {
        self.record("update_user")?;
        let mut stored = self.users.lock_ignore_poison();
        if let Some(user) = stored.iter_mut().find(|user| user.id == id) {
            user.name = draft.name.clone();
            user.username = draft.username.clone();
            user.email = draft.email.clone();
            return Ok(user.clone());
        }
        // The demo API echoes a patched record even for unknown ids.
        Ok(draft.clone().into_user(id))
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.record("delete_user")?;
        let mut stored = self.users.lock_ignore_poison();
        stored.retain(|user| user.id != id);
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        self.record("list_posts")?;
        Ok(self.stored_posts())
    }

    async fn create_post(&self, post: &Post) -> Result<Post> {
        self.record("create_post")?;
        let mut stored = self.posts.lock_ignore_poison();
        stored.push(post.clone());
        Ok(post.clone())
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post> {
        self.record("update_post")?;
        let mut stored = self.posts.lock_ignore_poison();
        if let Some(post) = stored.iter_mut().find(|post| post.id == id) {
            post.user_id = draft.user_id;
            post.title = draft.title.clone();
            return Ok(post.clone());
        }
        Ok(Post {
            id,
            user_id: draft.user_id,
            title: draft.title.clone(),
        })
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.record("delete_post")?;
        let mut stored = self.posts.lock_ignore_poison();
        stored.retain(|post| post.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_list_returns_seeded_users() {
        let client = MockCollectionClient::new()
            .with_users(vec![sample_user(1, "Ann"), sample_user(2, "Ben")]);

        let users = client.list_users().await.expect("list failed");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ann");
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let client = MockCollectionClient::new().with_failure("delete_user");

        let result = client.delete_user(1).await;
        assert!(result.is_err(), "delete_user should fail");
        if let Err(err) = result {
            assert!(matches!(err, Error::Api { status: 500, .. }));
        }

        // The failed call is still recorded.
        assert_eq!(client.call_history(), vec!["delete_user".to_owned()]);
    }

    #[tokio::test]
    async fn test_create_user_assigns_next_id() {
        let client = MockCollectionClient::new().with_users(vec![sample_user(7, "Cid")]);

        let draft = UserDraft {
            name: "Dee".to_owned(),
            username: "dee".to_owned(),
            email: "dee@example.com".to_owned(),
        };
        let created = client.create_user(&draft).await.expect("create failed");
        assert_eq!(created.id, 8);
        assert_eq!(client.stored_users().len(), 2);
    }

    #[tokio::test]
    async fn test_call_history_ordering() {
        let client = MockCollectionClient::new();

        client.list_users().await.expect("list users failed");
        client.list_posts().await.expect("list posts failed");
        assert_eq!(
            client.call_history(),
            vec!["list_users".to_owned(), "list_posts".to_owned()]
        );

        client.clear_history();
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_post_echoes_record() {
        let client = MockCollectionClient::new();
        let draft = PostDraft {
            user_id: 3,
            title: "echo".to_owned(),
        };

        let updated = client.update_post(42, &draft).await.expect("update failed");
        assert_eq!(updated.id, 42);
        assert_eq!(updated.title, "echo");
    }
}
