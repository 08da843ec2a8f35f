use super::Id;
use serde::{Deserialize, Serialize};

/// The account behind a comment or post (Lemmy's `creator`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub actor_id: String,
    #[serde(default)]
    pub local: bool,
    #[serde(default)]
    pub bot_account: bool,
    #[serde(default)]
    pub banned: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub instance_id: i64,
}

impl Person {
    /// A Markdown mention that links to the person's profile, e.g.
    /// `[@alice](https://lemmy.ml/u/alice)`.
    pub fn mention(&self) -> String {
        let handle = self
            .actor_id
            .rsplit('/')
            .next()
            .filter(|handle| !handle.is_empty())
            .unwrap_or(&self.name);
        format!("[@{}]({})", handle, self.actor_id)
    }
}
