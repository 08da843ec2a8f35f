use super::{Community, Id, Person, Post, StreamItem};
use serde::{Deserialize, Serialize};

/// One entry of `comment/list`: the comment plus the post, community and author it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    pub post: Post,
    pub community: Community,
    pub creator: Person,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Id,
    #[serde(default)]
    pub creator_id: Id,
    #[serde(default)]
    pub post_id: Id,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub ap_id: String,
    #[serde(default)]
    pub local: bool,
    /// Dot-separated ancestry, e.g. `0.12.34` for comment 34 replying to comment 12.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub distinguished: bool,
    #[serde(default)]
    pub language_id: i32,
}

impl Comment {
    /// The comment this one replies to, or `None` for a top-level comment.
    pub fn parent_id(&self) -> Option<Id> {
        let mut ancestors = self.path.split('.').rev().skip(1);
        match ancestors.next()? {
            "0" => None,
            id => id.parse().ok().map(Id),
        }
    }
}

impl StreamItem for CommentView {
    const LIST_ENDPOINT: &'static str = "comment/list";
    const LIST_KEY: &'static str = "comments";

    fn id(&self) -> Id {
        self.comment.id
    }
}
