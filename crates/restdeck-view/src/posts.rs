//! View-model for the posts screen.
//!
//! Two collections are fetched independently and joined per render: each
//! post row shows the owning user's columns, with placeholders when the
//! reference dangles. Search filters through the owner's name rather than a
//! post field.

use restdeck_core::{
    CollectionClient, Error, JoinedRow, Notice, NotificationSink, Post, PostDraft, Result, User,
};

use crate::FILL_ALL_FIELDS;
use crate::ids::next_id;
use crate::load::LoadState;

/// Editable field of a post row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    /// Owning user id, edited as raw text.
    UserId,
    /// Post title.
    Title,
}

impl PostField {
    /// All fields in form/tab order.
    pub const ALL: [Self; 2] = [Self::UserId, Self::Title];

    /// Human-readable label for form rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::UserId => "User ID",
            Self::Title => "Title",
        }
    }
}

/// Raw form input for a post: the user id stays a string until a save
/// action parses it, mirroring how it is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    /// Raw user id text.
    pub user_id: String,
    /// Title text.
    pub title: String,
}

impl PostInput {
    /// Seeds an input from an existing record.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            user_id: post.user_id.to_string(),
            title: post.title.clone(),
        }
    }

    /// The user id as a number, if the text parses to a non-zero value.
    #[must_use]
    pub fn parsed_user_id(&self) -> Option<i64> {
        self.user_id
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id != 0)
    }
}

/// State of the posts screen: both collections, the search query, and the
/// transient edit/create inputs.
#[derive(Default)]
pub struct PostsPage {
    /// Fetched post records.
    pub posts: Vec<Post>,
    /// Fetched user records, joined against per render.
    pub users: Vec<User>,
    /// Whether the initial list requests have resolved.
    pub load: LoadState,
    /// Live search query, matched against owner names.
    pub search: String,
    /// Id of the row currently in edit mode, if any.
    pub editing_id: Option<i64>,
    /// Input for the row being edited.
    pub editing_input: PostInput,
    /// Input for the creation form.
    pub new_input: PostInput,
    /// Whether the creation form is shown.
    pub form_visible: bool,
}

impl PostsPage {
    /// Creates an empty page in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches both collections concurrently, with no ordering guarantee
    /// between their completions. Each collection is applied independently:
    /// one failing leaves the other usable and the join tolerates the gap.
    ///
    /// # Errors
    ///
    /// Returns the first error when either list request fails.
    pub async fn load(&mut self, client: &dyn CollectionClient) -> Result<()> {
        self.load = LoadState::Loading;
        let (posts, users) = tokio::join!(client.list_posts(), client.list_users());

        let mut first_error: Option<Error> = None;
        match posts {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                tracing::error!("post list request failed: {err}");
                first_error = Some(err);
            }
        }
        match users {
            Ok(users) => self.users = users,
            Err(err) => {
                tracing::error!("user list request failed: {err}");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            None => {
                self.load = LoadState::Loaded;
                Ok(())
            }
            Some(err) => {
                self.load = LoadState::Failed;
                Err(err)
            }
        }
    }

    /// Posts whose owner's name contains the search query,
    /// case-insensitively. An empty query matches every post, dangling
    /// owner or not, so the empty filter is the identity.
    pub fn filtered(&self) -> impl Iterator<Item = &Post> {
        let query = self.search.to_lowercase();
        self.posts.iter().filter(move |post| {
            if query.is_empty() {
                return true;
            }
            self.users
                .iter()
                .any(|user| user.id == post.user_id && user.name.to_lowercase().contains(&query))
        })
    }

    /// The filtered posts paired with their owners by linear lookup.
    /// Recomputed per call; rows with no resolving owner carry `None` and
    /// render as placeholders.
    #[must_use]
    pub fn joined_rows(&self) -> Vec<JoinedRow<'_>> {
        self.filtered()
            .map(|post| JoinedRow {
                post,
                user: self.users.iter().find(|user| user.id == post.user_id),
            })
            .collect()
    }

    /// Moves the given row into edit mode, seeding the input from its
    /// current values. Any unsaved input from a previous edit is silently
    /// discarded. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(post) = self.posts.iter().find(|post| post.id == id) {
            self.editing_id = Some(id);
            self.editing_input = PostInput::from_post(post);
        }
    }

    /// Merges a value into the editing input by field.
    pub fn set_editing_field(&mut self, field: PostField, value: impl Into<String>) {
        Self::set_field(&mut self.editing_input, field, value.into());
    }

    /// Merges a value into the creation input by field.
    pub fn set_new_field(&mut self, field: PostField, value: impl Into<String>) {
        Self::set_field(&mut self.new_input, field, value.into());
    }

    /// Field-addressed input merge.
    fn set_field(input: &mut PostInput, field: PostField, value: String) {
        match field {
            PostField::UserId => input.user_id = value,
            PostField::Title => input.title = value,
        }
    }

    /// Sends the editing input as a partial update for the row in edit mode.
    ///
    /// On success the input is merged into the local post and edit mode
    /// ends; on failure (including an unparseable user id) local state is
    /// unchanged and the row stays editing. A no-op when no row is being
    /// edited.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the user id text does not parse to a
    /// non-zero number, or the client error if the update request fails.
    pub async fn commit_edit(&mut self, client: &dyn CollectionClient) -> Result<()> {
        let Some(id) = self.editing_id else {
            return Ok(());
        };
        let Some(user_id) = self.editing_input.parsed_user_id() else {
            return Err(Error::Validation(
                "user id must be a non-zero number".to_owned(),
            ));
        };

        let draft = PostDraft {
            user_id,
            title: self.editing_input.title.clone(),
        };
        match client.update_post(id, &draft).await {
            Ok(_) => {
                if let Some(post) = self.posts.iter_mut().find(|post| post.id == id) {
                    post.user_id = draft.user_id;
                    post.title = draft.title;
                }
                self.editing_id = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("post update request failed: {err}");
                Err(err)
            }
        }
    }

    /// Requests remote deletion, removing the local post only on success.
    ///
    /// # Errors
    ///
    /// Returns the client error if the delete request fails; the post stays
    /// in the list as if nothing happened.
    pub async fn delete(&mut self, client: &dyn CollectionClient, id: i64) -> Result<()> {
        match client.delete_post(id).await {
            Ok(()) => {
                self.posts.retain(|post| post.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!("post delete request failed: {err}");
                Err(err)
            }
        }
    }

    /// Submits the creation form.
    ///
    /// Validation precedes the network call here: a blank or zero user id
    /// or an empty title warns via the sink and no request is issued. A
    /// valid input is assigned the next local id, sent as a complete record,
    /// and appended on success; the form is hidden and the input reset.
    ///
    /// # Errors
    ///
    /// Returns the client error if the create request fails; nothing is
    /// appended in that case.
    pub async fn add_new(
        &mut self,
        client: &dyn CollectionClient,
        sink: &mut dyn NotificationSink,
    ) -> Result<()> {
        let Some(user_id) = self.new_input.parsed_user_id() else {
            sink.notify(Notice::warning(FILL_ALL_FIELDS));
            return Ok(());
        };
        if self.new_input.title.is_empty() {
            sink.notify(Notice::warning(FILL_ALL_FIELDS));
            return Ok(());
        }

        let id = next_id(self.posts.iter().map(|post| post.id));
        let post = Post {
            id,
            user_id,
            title: self.new_input.title.clone(),
        };
        match client.create_post(&post).await {
            Ok(_) => {
                self.posts.push(post);
                self.form_visible = false;
                self.new_input = PostInput::default();
                Ok(())
            }
            Err(err) => {
                tracing::error!("post create request failed: {err}");
                Err(err)
            }
        }
    }
}
