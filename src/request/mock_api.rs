//! Mock Lemmy API (for use in unit testing)
use super::{Api, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Answers calls from a queue of scripted replies.  Once the queue is empty every GET returns an
/// empty listing and every POST an empty object.
pub(crate) struct MockApi {
    replies: Mutex<VecDeque<Result<Value>>>,
    gets: Mutex<Vec<(String, Vec<(String, String)>)>>,
    posts: Mutex<Vec<(String, Value)>>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn reply(self, reply: Result<Value>) -> Self {
        self.replies.lock().expect("in test").push_back(reply);
        self
    }

    pub(crate) fn gets(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.gets.lock().expect("in test").clone()
    }

    pub(crate) fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().expect("in test").clone()
    }

    fn next_reply(&self) -> Option<Result<Value>> {
        self.replies.lock().expect("in test").pop_front()
    }
}

#[async_trait]
impl Api for MockApi {
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let params = params
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect();
        self.gets
            .lock()
            .expect("in test")
            .push((endpoint.to_string(), params));
        self.next_reply()
            .unwrap_or_else(|| Ok(json!({ "comments": [], "posts": [] })))
    }

    async fn post(&self, endpoint: &str, json: Value) -> Result<Value> {
        self.posts
            .lock()
            .expect("in test")
            .push((endpoint.to_string(), json));
        self.next_reply().unwrap_or_else(|| Ok(json!({})))
    }
}

fn creator(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("user_{}", id),
        "actor_id": format!("https://lemmy.example/u/user_{}", id),
        "local": true,
    })
}

fn community() -> Value {
    json!({
        "id": 2,
        "name": "pcm",
        "title": "PoliticalCompassMemes",
        "actor_id": "https://lemmy.example/c/pcm",
        "local": true,
    })
}

fn post(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("post #{}", id),
        "creator_id": 100 + id,
        "community_id": 2,
        "published": "2023-07-01T12:00:00",
        "ap_id": format!("https://lemmy.example/post/{}", id),
        "local": true,
        "language_id": 37,
    })
}

/// A `CommentView` for a top-level comment on post 1.
pub(crate) fn comment_json(id: i64) -> Value {
    json!({
        "comment": {
            "id": id,
            "creator_id": 200 + id,
            "post_id": 1,
            "content": format!("comment #{}", id),
            "published": "2023-07-01T12:00:00",
            "ap_id": format!("https://lemmy.example/comment/{}", id),
            "local": true,
            "path": format!("0.{}", id),
            "language_id": 37,
        },
        "post": post(1),
        "community": community(),
        "creator": creator(200 + id),
    })
}

pub(crate) fn post_json(id: i64) -> Value {
    json!({
        "post": post(id),
        "creator": creator(100 + id),
        "community": community(),
    })
}

/// A `comment/list` response holding `ids` in the given order.
pub(crate) fn comment_page(ids: &[i64]) -> Value {
    json!({ "comments": ids.iter().map(|id| comment_json(*id)).collect::<Vec<_>>() })
}

pub(crate) fn post_page(ids: &[i64]) -> Value {
    json!({ "posts": ids.iter().map(|id| post_json(*id)).collect::<Vec<_>>() })
}
