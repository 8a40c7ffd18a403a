use serde::{Deserialize, Serialize};

/// A user record as served by the remote collection API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// A post record. `user_id` references a [`User`] id but the link is not
/// enforced anywhere; dangling references are tolerated by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
}

/// Unsaved edit state for a user row. Doubles as the create/update request
/// body: the remote API accepts the same partial shape for both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl UserDraft {
    /// Seeds a draft from an existing record.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }

    /// Returns true when every required field is non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.username.is_empty() && !self.email.is_empty()
    }

    /// Builds the record that a completed draft appends locally.
    #[must_use]
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}

/// Unsaved edit state for a post row, and the update request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
}

impl PostDraft {
    /// Seeds a draft from an existing record.
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
        }
    }
}

/// A post paired with its owning user, found by linear lookup on
/// `post.user_id == user.id`. View-only projection; owns nothing and is
/// recomputed on every render.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'row> {
    /// The post being displayed.
    pub post: &'row Post,
    /// The owning user, if one resolves.
    pub user: Option<&'row User>,
}

impl JoinedRow<'_> {
    /// Owner name, or a placeholder when the reference dangles.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.user.map_or("Unknown", |user| user.name.as_str())
    }

    /// Owner username, or a placeholder when the reference dangles.
    #[must_use]
    pub fn owner_username(&self) -> &str {
        self.user.map_or("-", |user| user.username.as_str())
    }

    /// Owner email, or a placeholder when the reference dangles.
    #[must_use]
    pub fn owner_email(&self) -> &str {
        self.user.map_or("-", |user| user.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, to_value};

    #[test]
    fn test_post_serde_field_names() {
        let post: Post = from_str(r#"{"id": 9, "userId": 5, "title": "Hi"}"#)
            .expect("Failed to parse post");
        assert_eq!(post.id, 9);
        assert_eq!(post.user_id, 5);
        assert_eq!(post.title, "Hi");

        let value = to_value(&post).expect("Failed to serialize post");
        assert!(value.get("userId").is_some(), "userId must round-trip");
        assert!(value.get("user_id").is_none(), "snake_case must not leak");
    }

    #[test]
    fn test_user_draft_completeness() {
        let mut draft = UserDraft::default();
        assert!(!draft.is_complete());

        draft.name = "Ann".to_owned();
        draft.username = "ann".to_owned();
        assert!(!draft.is_complete(), "email still missing");

        draft.email = "ann@example.com".to_owned();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_user_draft_into_user() {
        let draft = UserDraft {
            name: "Ann".to_owned(),
            username: "ann".to_owned(),
            email: "ann@example.com".to_owned(),
        };
        let user = draft.into_user(4);
        assert_eq!(user.id, 4);
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn test_joined_row_placeholders() {
        let post = Post {
            id: 9,
            user_id: 5,
            title: "Hi".to_owned(),
        };

        let row = JoinedRow {
            post: &post,
            user: None,
        };
        assert_eq!(row.owner_name(), "Unknown");
        assert_eq!(row.owner_username(), "-");
        assert_eq!(row.owner_email(), "-");

        let user = User {
            id: 5,
            name: "Cid".to_owned(),
            username: "cid".to_owned(),
            email: "cid@example.com".to_owned(),
        };
        let row = JoinedRow {
            post: &post,
            user: Some(&user),
        };
        assert_eq!(row.owner_name(), "Cid");
        assert_eq!(row.owner_username(), "cid");
    }
}
