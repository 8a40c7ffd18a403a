use async_trait::async_trait;
use reqwest::{Client, Response};

use restdeck_core::{CollectionClient, Error, Post, PostDraft, Result, User, UserDraft};

/// Default remote API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Users collection path segment.
const USERS: &str = "users";
/// Posts collection path segment.
const POSTS: &str = "posts";

/// Remote collection client backed by an HTTP REST API.
///
/// Sends no authentication headers and no pagination parameters; the whole
/// collection is assumed to fit in a single response.
pub struct HttpCollectionClient {
    /// HTTP client for API requests.
    client: Client,
    /// Base URL of the remote API, without a trailing slash.
    base_url: String,
}

impl HttpCollectionClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: Client::default(),
            base_url,
        }
    }

    /// URL of a whole collection.
    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    /// URL of a single record within a collection.
    fn record_url(&self, collection: &str, id: i64) -> String {
        format!("{}/{collection}/{id}", self.base_url)
    }

    /// Maps a non-success status to a typed API error, passing success through.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for HttpCollectionClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CollectionClient for HttpCollectionClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.client.get(self.collection_url(USERS)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User> {
        let response = self
            .client
            .post(self.collection_url(USERS))
            .json(draft)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User> {
        let response = self
            .client
            .patch(self.record_url(USERS, id))
            .json(draft)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        let response = self.client.delete(self.record_url(USERS, id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(self.collection_url(POSTS)).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_post(&self, post: &Post) -> Result<Post> {
        let response = self
            .client
            .post(self.collection_url(POSTS))
            .json(post)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update_post(&self, id: i64, draft: &PostDraft) -> Result<Post> {
        let response = self
            .client
            .patch(self.record_url(POSTS, id))
            .json(draft)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        let response = self.client.delete(self.record_url(POSTS, id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpCollectionClient::new("https://api.example.com/");
        assert_eq!(
            client.collection_url(USERS),
            "https://api.example.com/users"
        );
    }

    #[test]
    fn test_record_url_shape() {
        let client = HttpCollectionClient::new("https://api.example.com");
        assert_eq!(
            client.record_url(POSTS, 9),
            "https://api.example.com/posts/9"
        );
    }

    #[test]
    fn test_default_base_url() {
        let client = HttpCollectionClient::default();
        assert_eq!(
            client.collection_url(USERS),
            format!("{DEFAULT_BASE_URL}/users")
        );
    }
}
