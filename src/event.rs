//! Items the stream hands to its consumer.
//!
//! The engine only needs an item's [`Id`]; everything else is carried through untouched for the
//! consumer.  [`Submission`] covers the two things a reply can be attached to.
mod comment;
mod community;
mod id;
mod person;
mod post;

pub use comment::{Comment, CommentView};
pub use community::Community;
pub use id::Id;
pub use person::Person;
pub use post::{Post, PostView};

use crate::request::{self, Api};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

type Result<T> = std::result::Result<T, request::Error>;

/// An item that one of Lemmy's listing endpoints returns newest-first.
pub trait StreamItem: DeserializeOwned + Send + 'static {
    /// The listing endpoint, relative to `/api/v3/`
    const LIST_ENDPOINT: &'static str;
    /// The field of the listing response that holds the items
    const LIST_KEY: &'static str;

    fn id(&self) -> Id;
}

/// Parse a listing response into items, in the order the API sent them.
///
/// A response without the list field is an empty page.  Either every item parses or none is
/// returned.
pub fn parse_page<T: StreamItem>(mut body: Value) -> Result<Vec<T>> {
    match body.get_mut(T::LIST_KEY).map(Value::take) {
        Some(items) => Ok(serde_json::from_value(items)?),
        None => {
            log::warn!(
                "Listing from `{}` had no `{}` field; treating it as an empty page",
                T::LIST_ENDPOINT,
                T::LIST_KEY
            );
            Ok(Vec::new())
        }
    }
}

/// A comment or a post: anything that can be replied to.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Comment(CommentView),
    Post(PostView),
}

impl Submission {
    pub fn id(&self) -> Id {
        match self {
            Self::Comment(view) => view.comment.id,
            Self::Post(view) => view.post.id,
        }
    }

    pub fn author(&self) -> &Person {
        match self {
            Self::Comment(view) => &view.creator,
            Self::Post(view) => &view.creator,
        }
    }

    /// Returns `true` for the post that starts a thread.
    pub fn is_thread_root(&self) -> bool {
        matches!(self, Self::Post(_))
    }

    /// Post `text` as a reply: nested under a comment, or top-level under a post.
    pub async fn reply(&self, api: &impl Api, text: &str) -> Result<Value> {
        let body = match self {
            Self::Comment(view) => json!({
                "content": text,
                "post_id": view.comment.post_id,
                "parent_id": view.comment.id,
                "language_id": view.comment.language_id,
            }),
            Self::Post(view) => json!({
                "content": text,
                "post_id": view.post.id,
                "language_id": view.post.language_id,
            }),
        };
        api.post("comment", body).await
    }

    /// Fetch what this submission replies to: the parent comment, the post for a top-level
    /// comment, or `None` for a post.
    pub async fn parent(&self, api: &impl Api) -> Result<Option<Submission>> {
        let view = match self {
            Self::Post(_) => return Ok(None),
            Self::Comment(view) => view,
        };
        let parent = match view.comment.parent_id() {
            Some(parent_id) => {
                let mut body = api.get("comment", &[("id", parent_id.to_string())]).await?;
                Self::Comment(serde_json::from_value(take_field(&mut body, "comment_view"))?)
            }
            None => {
                let params = [("id", view.comment.post_id.to_string())];
                let mut body = api.get("post", &params).await?;
                Self::Post(serde_json::from_value(take_field(&mut body, "post_view"))?)
            }
        };
        Ok(Some(parent))
    }
}

impl From<CommentView> for Submission {
    fn from(view: CommentView) -> Self {
        Self::Comment(view)
    }
}

impl From<PostView> for Submission {
    fn from(view: PostView) -> Self {
        Self::Post(view)
    }
}

fn take_field(body: &mut Value, key: &str) -> Value {
    body.get_mut(key).map(Value::take).unwrap_or_default()
}
