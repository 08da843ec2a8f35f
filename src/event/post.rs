use super::{Community, Id, Person, StreamItem};
use serde::{Deserialize, Serialize};

/// One entry of `post/list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostView {
    pub post: Post,
    pub creator: Person,
    pub community: Community,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub creator_id: Id,
    #[serde(default)]
    pub community_id: Id,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub ap_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub language_id: i32,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub featured_community: bool,
    #[serde(default)]
    pub featured_local: bool,
}

impl StreamItem for PostView {
    const LIST_ENDPOINT: &'static str = "post/list";
    const LIST_KEY: &'static str = "posts";

    fn id(&self) -> Id {
        self.post.id
    }
}
