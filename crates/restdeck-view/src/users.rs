//! View-model for the users screen.

use restdeck_core::{CollectionClient, Notice, NotificationSink, Result, User, UserDraft};

use crate::FILL_ALL_FIELDS;
use crate::ids::next_id;
use crate::load::LoadState;

/// Editable field of a user row, for merge-by-field draft updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// Display name.
    Name,
    /// Login handle.
    Username,
    /// Email address.
    Email,
}

impl UserField {
    /// All fields in form/tab order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Username, Self::Email];

    /// Human-readable label for form rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
        }
    }
}

/// State of the users screen: the fetched collection, the search query, and
/// the transient edit/create drafts.
///
/// Per-row lifecycle: viewing, then `begin_edit` moves a single row into
/// editing, and only a successful `commit_edit` moves it back. A failed
/// commit leaves the row editing with the unsent draft; starting an edit on
/// another row silently discards the previous draft.
#[derive(Default)]
pub struct UsersPage {
    /// Fetched user records, mutated only after a remote call succeeds.
    pub items: Vec<User>,
    /// Whether the initial list request has resolved.
    pub load: LoadState,
    /// Live search query; filtering is derived, never persisted.
    pub search: String,
    /// Id of the row currently in edit mode, if any.
    pub editing_id: Option<i64>,
    /// Draft for the row being edited.
    pub editing_draft: UserDraft,
    /// Draft for the creation form.
    pub new_draft: UserDraft,
    /// Whether the creation form is shown.
    pub form_visible: bool,
}

impl UsersPage {
    /// Creates an empty page in the loading state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the full collection, replacing `items` on success.
    ///
    /// On failure the collection stays empty and the error is returned for
    /// the shell to surface.
    ///
    /// # Errors
    ///
    /// Returns the client error if the list request fails.
    pub async fn load(&mut self, client: &dyn CollectionClient) -> Result<()> {
        self.load = LoadState::Loading;
        match client.list_users().await {
            Ok(users) => {
                self.items = users;
                self.load = LoadState::Loaded;
                Ok(())
            }
            Err(err) => {
                tracing::error!("user list request failed: {err}");
                self.load = LoadState::Failed;
                Err(err)
            }
        }
    }

    /// Items whose name starts with the search query, case-insensitively.
    ///
    /// Pure derivation over `(items, search)`; an empty query yields every
    /// item.
    pub fn filtered(&self) -> impl Iterator<Item = &User> {
        let query = self.search.to_lowercase();
        self.items
            .iter()
            .filter(move |user| user.name.to_lowercase().starts_with(&query))
    }

    /// Moves the given row into edit mode, seeding the draft from its
    /// current values. Any unsaved draft from a previous edit is silently
    /// discarded. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(user) = self.items.iter().find(|user| user.id == id) {
            self.editing_id = Some(id);
            self.editing_draft = UserDraft::from_user(user);
        }
    }

    /// Merges a value into the editing draft by field.
    pub fn set_editing_field(&mut self, field: UserField, value: impl Into<String>) {
        Self::set_field(&mut self.editing_draft, field, value.into());
    }

    /// Merges a value into the creation draft by field.
    pub fn set_new_field(&mut self, field: UserField, value: impl Into<String>) {
        Self::set_field(&mut self.new_draft, field, value.into());
    }

    /// Field-addressed draft merge.
    fn set_field(draft: &mut UserDraft, field: UserField, value: String) {
        match field {
            UserField::Name => draft.name = value,
            UserField::Username => draft.username = value,
            UserField::Email => draft.email = value,
        }
    }

    /// Sends the editing draft as a partial update for the row in edit mode.
    ///
    /// On success the draft is merged into the local item (id and any field
    /// outside the draft untouched) and edit mode ends. On failure local
    /// state is unchanged and the row stays editing with the unsent draft.
    /// A no-op when no row is being edited.
    ///
    /// # Errors
    ///
    /// Returns the client error if the update request fails.
    pub async fn commit_edit(&mut self, client: &dyn CollectionClient) -> Result<()> {
        let Some(id) = self.editing_id else {
            return Ok(());
        };
        match client.update_user(id, &self.editing_draft).await {
            Ok(_) => {
                if let Some(user) = self.items.iter_mut().find(|user| user.id == id) {
                    user.name = self.editing_draft.name.clone();
                    user.username = self.editing_draft.username.clone();
                    user.email = self.editing_draft.email.clone();
                }
                self.editing_id = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!("user update request failed: {err}");
                Err(err)
            }
        }
    }

    /// Requests remote deletion, removing the local item only on success.
    ///
    /// # Errors
    ///
    /// Returns the client error if the delete request fails; the item stays
    /// in the list as if nothing happened.
    pub async fn delete(&mut self, client: &dyn CollectionClient, id: i64) -> Result<()> {
        match client.delete_user(id).await {
            Ok(()) => {
                self.items.retain(|user| user.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!("user delete request failed: {err}");
                Err(err)
            }
        }
    }

    /// Submits the creation form.
    ///
    /// The create request is issued before required-field validation; only
    /// the local append is gated on the check. An incomplete draft warns via
    /// the sink and leaves `items` untouched even though the request was
    /// sent. A complete draft is appended with a locally assigned id, the
    /// form is hidden, and the draft reset.
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
        if let Err(err) = client.create_user(&self.new_draft).await {
            tracing::error!("user create request failed: {err}");
            return Err(err);
        }

        if !self.new_draft.is_complete() {
            sink.notify(Notice::warning(FILL_ALL_FIELDS));
            return Ok(());
        }

        let id = next_id(self.items.iter().map(|user| user.id));
        let draft = std::mem::take(&mut self.new_draft);
        self.items.push(draft.into_user(id));
        self.form_visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restdeck_api::MockCollectionClient;
    use restdeck_core::{RecordingSink, Severity};

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn loaded_page(users: Vec<User>) -> UsersPage {
        UsersPage {
            items: users,
            load: LoadState::Loaded,
            ..UsersPage::default()
        }
    }

    #[tokio::test]
    async fn test_load_replaces_items() {
        let client = MockCollectionClient::new().with_users(vec![user(1, "Ann")]);
        let mut page = UsersPage::new();
        assert_eq!(page.load, LoadState::Loading);

        page.load(&client).await.expect("load failed");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.load, LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_items_empty() {
        let client = MockCollectionClient::new()
            .with_users(vec![user(1, "Ann")])
            .with_failure("list_users");
        let mut page = UsersPage::new();

        let result = page.load(&client).await;
        assert!(result.is_err(), "load should fail");
        assert!(page.items.is_empty());
        assert_eq!(page.load, LoadState::Failed);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        let page = loaded_page(vec![user(1, "Ann"), user(2, "Ben")]);
        let filtered: Vec<&User> = page.filtered().collect();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_is_prefix_match() {
        let mut page = loaded_page(vec![user(1, "Ann"), user(2, "Ben")]);

        page.search = "an".to_owned();
        let filtered: Vec<&User> = page.filtered().collect();
        assert_eq!(filtered.len(), 1, "prefix match should keep Ann only");
        assert_eq!(filtered[0].name, "Ann");

        // "n" is inside "Ann" but not a prefix of any name.
        page.search = "n".to_owned();
        assert_eq!(page.filtered().count(), 0);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut page = loaded_page(vec![user(1, "Ann")]);
        page.search = "AN".to_owned();
        assert_eq!(page.filtered().count(), 1);
    }

    #[test]
    fn test_begin_edit_seeds_draft() {
        let mut page = loaded_page(vec![user(1, "Ann"), user(2, "Ben")]);

        page.begin_edit(2);
        assert_eq!(page.editing_id, Some(2));
        assert_eq!(page.editing_draft.name, "Ben");

        // Starting another edit discards the previous draft silently.
        page.set_editing_field(UserField::Name, "Benjamin");
        page.begin_edit(1);
        assert_eq!(page.editing_id, Some(1));
        assert_eq!(page.editing_draft.name, "Ann");
    }

    #[test]
    fn test_begin_edit_unknown_id_is_ignored() {
        let mut page = loaded_page(vec![user(1, "Ann")]);
        page.begin_edit(99);
        assert_eq!(page.editing_id, None);
    }

    #[tokio::test]
    async fn test_commit_edit_merges_only_edited_fields() {
        let client = MockCollectionClient::new();
        let mut page = loaded_page(vec![user(1, "Ann"), user(2, "Ben")]);

        page.begin_edit(1);
        page.set_editing_field(UserField::Name, "Anna");
        page.commit_edit(&client).await.expect("commit failed");

        assert_eq!(page.editing_id, None);
        assert_eq!(page.items[0].id, 1, "id must be untouched");
        assert_eq!(page.items[0].name, "Anna");
        assert_eq!(page.items[0].username, "ann", "unedited field untouched");
        assert_eq!(page.items[1].name, "Ben", "other rows untouched");
    }

    #[tokio::test]
    async fn test_commit_edit_failure_leaves_row_editing() {
        let client = MockCollectionClient::new().with_failure("update_user");
        let mut page = loaded_page(vec![user(1, "Ann")]);

        page.begin_edit(1);
        page.set_editing_field(UserField::Name, "Anna");
        let result = page.commit_edit(&client).await;

        assert!(result.is_err(), "commit should fail");
        assert_eq!(page.items[0].name, "Ann", "items unchanged on failure");
        assert_eq!(page.editing_id, Some(1), "row stays in edit mode");
        assert_eq!(page.editing_draft.name, "Anna", "draft kept for retry");
    }

    #[tokio::test]
    async fn test_commit_edit_without_edit_is_noop() {
        let client = MockCollectionClient::new();
        let mut page = loaded_page(vec![user(1, "Ann")]);

        page.commit_edit(&client).await.expect("noop commit failed");
        assert_eq!(client.call_count(), 0, "no request without an active edit");
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let client = MockCollectionClient::new();
        let mut page = loaded_page(vec![user(1, "Ann"), user(2, "Ben")]);

        page.delete(&client, 1).await.expect("delete failed");
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 2);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_items_unchanged() {
        let client = MockCollectionClient::new().with_failure("delete_user");
        let mut page = loaded_page(vec![user(1, "Ann")]);

        let result = page.delete(&client, 1).await;
        assert!(result.is_err(), "delete should fail");
        assert_eq!(page.items.len(), 1, "item still displayed");
    }

    #[tokio::test]
    async fn test_add_new_appends_with_next_id() {
        let client = MockCollectionClient::new();
        let mut sink = RecordingSink::default();
        let mut page = loaded_page(vec![user(3, "Ann"), user(7, "Ben")]);
        page.form_visible = true;

        page.set_new_field(UserField::Name, "Cid");
        page.set_new_field(UserField::Username, "cid");
        page.set_new_field(UserField::Email, "cid@example.com");
        page.add_new(&client, &mut sink).await.expect("add failed");

        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[2].id, 8, "max id + 1");
        assert!(!page.form_visible, "form hidden after a successful add");
        assert_eq!(page.new_draft, UserDraft::default(), "draft reset");
        assert!(sink.notices.is_empty());
    }

    #[tokio::test]
    async fn test_add_new_blank_field_still_issues_create() {
        let client = MockCollectionClient::new();
        let mut sink = RecordingSink::default();
        let mut page = loaded_page(vec![user(1, "Ann")]);

        page.set_new_field(UserField::Name, "Cid");
        // username and email left blank
        page.add_new(&client, &mut sink).await.expect("add failed");

        // The request went out before validation ran.
        assert_eq!(client.call_history(), vec!["create_user".to_owned()]);
        assert_eq!(page.items.len(), 1, "nothing appended locally");
        assert_eq!(sink.notices.len(), 1);
        assert_eq!(sink.notices[0].severity, Severity::Warning);
        assert_eq!(sink.notices[0].text, FILL_ALL_FIELDS);
    }

    #[tokio::test]
    async fn test_add_new_create_failure_appends_nothing() {
        let client = MockCollectionClient::new().with_failure("create_user");
        let mut sink = RecordingSink::default();
        let mut page = loaded_page(vec![user(1, "Ann")]);

        page.set_new_field(UserField::Name, "Cid");
        page.set_new_field(UserField::Username, "cid");
        page.set_new_field(UserField::Email, "cid@example.com");
        let result = page.add_new(&client, &mut sink).await;

        assert!(result.is_err(), "add should fail");
        assert_eq!(page.items.len(), 1);
        assert!(sink.notices.is_empty(), "no validation warning on transport failure");
    }
}
